//! 외래키 참조 검사

use std::path::Path;

pub fn run(path: &Path) -> anyhow::Result<()> {
    let database = super::load(path)?;
    let errors = database.dangling_references();

    if errors.is_empty() {
        println!("{}: {} tables, all foreign keys resolve", path.display(), database.len());
        return Ok(());
    }

    for error in &errors {
        println!("- {}", error);
    }
    anyhow::bail!("{} dangling foreign key reference(s)", errors.len())
}
