use colored::Colorize;

use trav_core::Star;

pub fn run(star: &Star, json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(star).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("  {} {}", "Star".bold(), star);
    println!("  position  {}", star.position_code);
    println!("  mapped    {}", if star.is_mapped { "yes" } else { "no" });
    if let Some(comment) = &star.comment {
        println!("  note      {}", comment.dimmed());
    }
    Ok(())
}
