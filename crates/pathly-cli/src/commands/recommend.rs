use pathly_core::Config;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let engine = super::engine(&config)?;
    for career in engine.cold_start_matches() {
        println!("{career}");
    }
    Ok(())
}
