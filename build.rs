fn main() {
    // Only compile Windows resources on Windows target
    #[cfg(target_os = "windows")]
    {
        println!("cargo:rerun-if-changed=resources/windows");
        // Embeds the app icon (tray) and the manifest (common controls v6, DPI awareness)
        let _ = embed_resource::compile("resources/windows/resources.rc", embed_resource::NONE);
    }
}
