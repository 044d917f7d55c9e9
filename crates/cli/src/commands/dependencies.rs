use anyhow::Result;
use colored::*;
use krane_core::manager::BuildManager;

pub fn execute(manager: &BuildManager) -> Result<()> {
    println!("{}", "Dependency Declarations".bold().underline());

    let declarations = manager.declarations();

    if declarations.is_empty() {
        println!("  {}", "No declarations recorded".dimmed());
        return Ok(());
    }

    for declaration in declarations {
        println!(
            "{} {} {} {}",
            declaration.consumer.as_str().blue().bold(),
            "->".dimmed(),
            declaration.target.as_str().cyan(),
            format!("({})", declaration.configuration).dimmed()
        );
    }

    Ok(())
}
