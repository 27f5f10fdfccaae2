// build.rs

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // --- Link against libcairo ---
    // pkg-config is tried first; it knows about non-standard prefixes and
    // the private dependencies (pixman, libpng, freetype) of static builds.
    // FontConfig is linked by the fontconfig-sys crate's own build script.
    match pkg_config::Config::new()
        .atleast_version("1.18")
        .probe("cairo")
    {
        Ok(library) => {
            eprintln!(
                "pkg-config found cairo {}. Linking configured automatically.",
                library.version
            );
        }
        Err(e) => {
            // --- Manual Linking Fallback ---
            // Assumes libcairo lives in a standard library path.
            eprintln!(
                "pkg-config failed for library 'cairo': {}. Falling back to manual linking.",
                e
            );
            println!("cargo:rustc-link-lib=cairo");
            println!("cargo:rustc-link-search=/usr/lib");
            eprintln!("Manual linking flags applied. Ensure the cairo development library is installed.");
        }
    }
}
