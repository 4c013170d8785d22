/// Stats from an import run.
#[derive(Debug, Default)]
pub struct ImportStats {
    pub records_processed: u32,
    pub states_created: u32,
    pub cities_created: u32,
    pub sites_created: u32,
    pub sites_existing: u32,
    pub sites_unclassified: u32,
}

impl std::fmt::Display for ImportStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Location Import Complete ===")?;
        writeln!(f, "Records processed:  {}", self.records_processed)?;
        writeln!(f, "States created:     {}", self.states_created)?;
        writeln!(f, "Cities created:     {}", self.cities_created)?;
        writeln!(f, "Sites created:      {}", self.sites_created)?;
        writeln!(f, "Sites existing:     {}", self.sites_existing)?;
        writeln!(f, "Sites unclassified: {}", self.sites_unclassified)?;
        Ok(())
    }
}
