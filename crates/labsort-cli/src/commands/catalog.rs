use labsort_core::catalog::database::catalog;
use labsort_core::error::LabsortError;

pub fn list() -> Result<(), LabsortError> {
    let c = catalog();
    println!("Built-in catalog (v{}): {} substances\n", c.version, c.entries.len());

    let max_name = c
        .entries
        .iter()
        .map(|e| e.substance.name.len())
        .max()
        .unwrap_or(20);

    println!(
        "  {:<width$}  {:<11}  {:<8}  Aliases",
        "Name",
        "CAS",
        "Formula",
        width = max_name
    );
    println!("  {}", "-".repeat(max_name + 2 + 13 + 10 + 10));

    for entry in &c.entries {
        let s = &entry.substance;
        println!(
            "  {:<width$}  {:<11}  {:<8}  {}",
            s.name,
            s.cas_number,
            s.formula,
            entry.aliases.join(", "),
            width = max_name
        );
    }
    println!();

    Ok(())
}
