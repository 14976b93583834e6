use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Create config template if it doesn't exist
    let out_dir = env::var("OUT_DIR").unwrap_or_else(|_| "./".to_string());
    let template_path = Path::new(&out_dir).join("../../../mediabridge.template.toml");

    let template = r#"# mediabridge configuration template
# Copy this file to 'mediabridge.toml' and adjust the values

# Row alignment, in bytes, for frames built with blank_frame_from
stride_alignment = 1

# Y,U,V fill for frames built with blank_frame_from
blank_fill = "0,0,0"
"#;

    let _ = fs::write(template_path, template);
    println!("cargo:rerun-if-changed=build.rs");
}
