use colored::Colorize;
use serde::Serialize;

use trav_core::Ehex;
use trav_dice::{DicePool, Modifier, PoolConfig, RollOption};

#[derive(Serialize)]
struct RollReport<'a> {
    seed: u64,
    count: i32,
    modifiers: &'a [Modifier],
    results: &'a [i32],
    total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    ehex: Option<String>,
}

pub fn run(
    count: i32,
    tokens: &[String],
    seed: Option<u64>,
    ehex: bool,
    json: bool,
) -> Result<(), String> {
    let modifiers = tokens
        .iter()
        .map(|t| t.parse::<Modifier>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    let options: Vec<&dyn RollOption> = modifiers.iter().map(|m| m as &dyn RollOption).collect();

    let config = PoolConfig::default().with_optional_seed(seed);
    let mut pool = DicePool::from_config(&config);
    let total = pool.roll(count, &options).map_err(|e| e.to_string())?.sum();
    tracing::debug!(seed = pool.seed(), total, "roll finished");

    let digit = ehex.then(|| Ehex::clamped(total).to_string());

    if json {
        let report = RollReport {
            seed: pool.seed(),
            count,
            modifiers: &modifiers,
            results: pool.results(),
            total,
            ehex: digit,
        };
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let label = std::iter::once(format!("{count}d6"))
        .chain(modifiers.iter().map(|m| m.to_string()))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "  {} {} {}",
        "Rolled".bold(),
        label,
        format!("(seed={})", pool.seed()).dimmed()
    );

    let dice: Vec<String> = pool.results().iter().map(|v| v.to_string()).collect();
    println!("  dice   [{}]", dice.join(", "));
    println!("  total  {}", total.to_string().green().bold());
    if let Some(digit) = digit {
        println!("  ehex   {}", digit.cyan());
    }

    Ok(())
}
