use std::fs;

fn main() {
    // The VERSION file is the release source of truth; Cargo.toml must follow it.
    let version_file = match fs::read_to_string("VERSION") {
        Ok(contents) => contents,
        Err(_) => panic!("VERSION file not found - run: echo '0.1.0' > VERSION"),
    };
    let version = version_file.trim();
    let cargo_version = env!("CARGO_PKG_VERSION");

    if version != cargo_version {
        panic!(
            "\n\n\
            VERSION MISMATCH\n\
            VERSION file: {}\n\
            Cargo.toml:   {}\n\n\
            Update the [package] version in Cargo.toml to {}\n\n",
            version, cargo_version, version
        );
    }

    println!("cargo:rerun-if-changed=VERSION");
}
