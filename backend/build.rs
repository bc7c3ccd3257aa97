use std::fs;
use std::path::Path;

// Embeds a fresh copy of the built console bundle. When frontend/dist is
// missing (frontend not built yet), the placeholder page committed under
// static/dist is served instead.
fn main() {
    println!("cargo:rerun-if-changed=../frontend/dist");

    let dist_dir = Path::new("../frontend/dist");
    if !dist_dir.exists() {
        return;
    }

    let out_dir = Path::new("static");
    let _ = fs::remove_dir_all(out_dir);
    fs::create_dir_all(out_dir).expect("create static dir");

    let options = fs_extra::dir::CopyOptions::new()
        .overwrite(true)
        .copy_inside(true);
    fs_extra::dir::copy(dist_dir, out_dir, &options).expect("copy frontend dist");
}
