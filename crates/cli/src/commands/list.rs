use anyhow::Result;
use colored::*;
use krane_core::manager::BuildManager;

pub fn execute(manager: &BuildManager) -> Result<()> {
    let result = manager.list_projects();

    println!("{}", "Projects".bold().underline());

    if result.projects.is_empty() {
        println!("  {}", "No projects found".dimmed());
        return Ok(());
    }

    let mut projects: Vec<_> = result.projects.iter().collect();
    projects.sort_by(|a, b| a.path.as_str().cmp(b.path.as_str()));

    for project in projects {
        if project.plugins.is_empty() {
            println!("{}", project.path.as_str().blue().bold());
        } else {
            println!(
                "{} {}",
                project.path.as_str().blue().bold(),
                format!("[{}]", project.plugins.join(", ")).green()
            );
        }

        if !project.extensions.is_empty() {
            println!(
                "  {} {}",
                "extensions:".dimmed(),
                project.extensions.join(", ")
            );
        }
    }

    Ok(())
}
