fn main() {
    let crate_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    match cbindgen::generate(&crate_dir) {
        Ok(bindings) => {
            bindings.write_to_file("include/blog.h");
        }
        Err(err) => println!("cargo:warning=cbindgen failed: {err}"),
    }
}
