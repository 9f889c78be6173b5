fn main() -> anyhow::Result<()> {
    #[cfg(not(target_os = "android"))]
    {
        example::desktop_main()
    }
    #[cfg(target_os = "android")]
    {
        // android builds only compile lib.rs; this branch keeps rust-analyzer happy
        Ok(())
    }
}
