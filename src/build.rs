// build.rs
fn main() {
    println!("cargo:rerun-if-changed=assets/qe_compare.ico");

    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/qe_compare.ico");
        res.set("FileDescription", "QE Climbing Analysis");
        if let Err(e) = res.compile() {
            println!("cargo:warning=could not embed window icon: {e}");
        }
    }
}
