fn main() -> std::io::Result<()> {
    // `src/whatsapp.rs` is checked in. Regenerate it with GENERATE_PROTO=1
    // after editing `src/whatsapp.proto`.
    if std::env::var_os("GENERATE_PROTO").is_none() {
        println!("cargo:rerun-if-changed=build.rs");
        return Ok(());
    }

    println!("cargo:rerun-if-changed=src/whatsapp.proto");
    println!("cargo:warning=regenerating src/whatsapp.rs from src/whatsapp.proto");

    let mut config = prost_build::Config::new();
    config.type_attribute(".", "#[derive(serde::Serialize, serde::Deserialize)]");
    // Message -> DeviceSentMessage -> Message is recursive.
    config.boxed(".whatsapp.Message.DeviceSentMessage.message");
    config.out_dir("src/");
    config.compile_protos(&["src/whatsapp.proto"], &["src/"])?;
    Ok(())
}
