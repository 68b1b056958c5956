fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Server stubs for the binary, client stubs for the integration tests
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile(&["../proto/user.proto"], &["../proto"])?;

    println!("cargo:rerun-if-changed=../proto/user.proto");

    Ok(())
}
