#[cfg(test)]
mod tests {
    use mediabridge::av::{
        samples_to_time_value, time_value_to_samples, AudioSamples, AudioSamplesListener,
        ListenerChain, Packet, PacketListener, PixelFormat, TimeUnit, TimeValue, VideoPicture,
        NO_PTS,
    };
    use mediabridge::config::Config;
    use mediabridge::error::{BridgeError, Result};
    use mediabridge::frame::{blank_frame, blank_frame_default, blank_frame_from, blank_frame_with};
    use mediabridge::raster::{image_to_picture, picture_to_image, ImageStorage, PackedImage};
    use mediabridge::utils::{bytes_to_ints, ints_to_bytes};
    use pretty_assertions::assert_eq;

    const WIDTH: u32 = 16;
    const HEIGHT: u32 = 9;
    const FRAME_DURATION_US: i64 = 40_000;

    /// Counts packets and stamps a running timestamp on them.
    struct Stamper {
        seen: usize,
    }

    impl PacketListener for Stamper {
        fn pre_decode(&mut self, packet: Packet) -> Packet {
            let pts = self.seen as i64 * FRAME_DURATION_US;
            self.seen += 1;
            packet.with_pts(pts)
        }
    }

    /// Silences the left channel before encoding.
    struct MuteLeft;

    impl AudioSamplesListener for MuteLeft {
        fn pre_encode(&mut self, mut samples: AudioSamples) -> AudioSamples {
            let channels = samples.channels() as usize;
            for frame in samples.data_mut().chunks_exact_mut(channels) {
                frame[0] = 0;
            }
            samples
        }
    }

    fn gradient_picture() -> Result<VideoPicture> {
        let mut picture = VideoPicture::new(PixelFormat::Rgb32, WIDTH, HEIGHT)?;
        let pixels: Vec<u32> = (0..WIDTH * HEIGHT).map(|i| i * 0x0001_0203).collect();
        let bytes = ints_to_bytes(&pixels);
        for (dst, src) in picture
            .rows_mut(0)
            .zip(bytes.chunks_exact(WIDTH as usize * 4))
        {
            dst.copy_from_slice(src);
        }
        picture.set_complete(PixelFormat::Rgb32, WIDTH, HEIGHT, 0)?;
        Ok(picture)
    }

    #[test]
    fn test_picture_image_round_trip() -> Result<()> {
        let picture = gradient_picture()?;
        let image = picture_to_image(&picture)?;
        println!("Converted {}x{} picture to image", image.width(), image.height());

        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let original = (y * WIDTH + x) * 0x0001_0203;
                assert_eq!(image.pixel(x, y), Some(original | 0xff00_0000));
            }
        }

        let back = image_to_picture(&image, 123_456)?;
        assert_eq!(back.format(), PixelFormat::Rgb32);
        assert_eq!(back.pts(), 123_456);
        assert!(back.is_complete());

        let original: Vec<u8> = picture.rows(0).flatten().copied().collect();
        let restored: Vec<u8> = back.rows(0).flatten().copied().collect();
        let original = bytes_to_ints(&original)?;
        let restored = bytes_to_ints(&restored)?;
        for (o, r) in original.iter().zip(&restored) {
            assert_eq!(o & 0x00ff_ffff, r & 0x00ff_ffff, "RGB channels changed");
            assert_eq!(r >> 24, 0xff, "alpha not forced opaque");
        }
        Ok(())
    }

    #[test]
    fn test_blank_frame_cannot_become_image() -> Result<()> {
        let frame = blank_frame(WIDTH, HEIGHT, 16, 128, 128, 0)?;
        match picture_to_image(&frame) {
            Err(BridgeError::InvalidArgument(msg)) => {
                println!("Rejected as expected: {}", msg);
                assert!(msg.contains("YUV420P"));
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_rgba_image_interop() -> Result<()> {
        let image = picture_to_image(&gradient_picture()?)?;
        let rgba = image.to_rgba_image()?;
        assert_eq!(rgba.dimensions(), (WIDTH, HEIGHT));

        let repacked = PackedImage::from_rgba_image(&rgba);
        assert_eq!(repacked, image);

        let bytes_backed = PackedImage::new(
            WIDTH,
            HEIGHT,
            ImageStorage::Bytes(ints_to_bytes(match image.storage() {
                ImageStorage::Ints(ints) => ints,
                other => panic!("unexpected storage {:?}", other),
            })),
        );
        let picture = image_to_picture(&bytes_backed, NO_PTS)?;
        assert_eq!(picture.pts(), NO_PTS);
        Ok(())
    }

    #[test]
    fn test_aligned_blank_frame_layout() -> Result<()> {
        let config = Config {
            stride_alignment: 32,
            blank_fill: (0, 0, 0),
        };
        let frame = blank_frame_with(&config, 33, 5, (1, 2, 3), 99)?;
        assert_eq!(frame.line_size(0), 64);
        assert_eq!(frame.line_size(1), 32);
        assert_eq!(frame.line_size(2), 32);
        assert_eq!(frame.size(), 64 * 5 + 32 * 3 * 2);
        assert!(frame.rows(1).all(|row| row.len() == 17 && row.iter().all(|&b| b == 2)));
        assert!(frame.rows(2).all(|row| row.len() == 17 && row.iter().all(|&b| b == 3)));
        Ok(())
    }

    #[test]
    fn test_default_frames_ignore_config() -> Result<()> {
        let frame = blank_frame(2, 2, 0, 0, 0, 0)?;
        assert_eq!(frame.plane(0), Some(&[0u8; 4][..]));
        assert_eq!(frame.plane(1), Some(&[0u8][..]));
        assert_eq!(frame.plane(2), Some(&[0u8][..]));

        let frame = blank_frame_default(2, 2, 0)?;
        assert_eq!(frame.size(), 6);
        assert!(frame.data().iter().all(|&b| b == 0), "default fill must be zero");

        let config = Config {
            stride_alignment: 16,
            blank_fill: (16, 128, 128),
        };
        let frame = blank_frame_from(&config, 2, 2, 0)?;
        assert_eq!(frame.line_size(0), 16);
        assert!(frame.rows(0).flatten().all(|&b| b == 16));
        assert!(frame.rows(1).flatten().all(|&b| b == 128));
        Ok(())
    }

    #[test]
    fn test_listener_pipeline() -> Result<()> {
        let mut chain = ListenerChain::new();
        chain
            .add_packet_listener(Stamper { seen: 0 })
            .add_audio_listener(MuteLeft);

        let stamps: Vec<Option<i64>> = (0..3)
            .map(|i| chain.pre_decode(Packet::new(vec![i as u8; 4])).pts)
            .collect();
        assert_eq!(stamps, vec![Some(0), Some(40_000), Some(80_000)]);

        let samples = AudioSamples::new(vec![5, 6, 7, 8], 44_100, 2)?;
        let decoded = chain.post_decode(samples.clone());
        assert_eq!(decoded, samples);
        let encoded = chain.pre_encode(decoded);
        assert_eq!(encoded.data(), &[0, 6, 0, 8]);
        Ok(())
    }

    #[test]
    fn test_audio_timing() -> Result<()> {
        let samples = AudioSamples::new(vec![0; 2 * 48_000], 48_000, 2)?;
        assert_eq!(samples.duration(), TimeValue::new(1, TimeUnit::Seconds));

        let frame = samples_to_time_value(1152, 48_000)?;
        assert_eq!(frame.get(TimeUnit::Microseconds), 24_000);
        assert_eq!(time_value_to_samples(Some(&frame), 48_000)?, 1152);

        assert!(samples_to_time_value(1152, 0).is_err());
        assert!(time_value_to_samples(None, 48_000).is_err());
        Ok(())
    }
}
