//! Generate blog pages

use anyhow::Result;

use crate::content::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// Render one HTML page per content-bearing entry
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let entries = ContentLoader::new(site).load_entries()?;
    tracing::info!("Loaded {} entries", entries.len());

    let generator = Generator::new(site)?;
    let mut rng = rand::thread_rng();
    let written = generator.generate_pages(&entries, &mut rng)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} pages in {:.2}s",
        written.len(),
        duration.as_secs_f64()
    );

    Ok(())
}
