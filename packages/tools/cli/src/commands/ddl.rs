//! DDL 출력

use std::path::Path;

use dbs_sql::{DdlGenerator, GrantGenerator};

use crate::config::Config;

pub fn run(path: &Path, config: &Config, grants: bool) -> anyhow::Result<()> {
    let database = super::load(path)?;

    let statements = DdlGenerator::new(config.dialect)
        .if_not_exists(config.if_not_exists)
        .generate(&database)?;
    for sql in statements {
        println!("{};", sql);
    }

    if grants {
        for sql in GrantGenerator::new(config.dialect).generate(&database) {
            println!("{};", sql);
        }
    }

    Ok(())
}
