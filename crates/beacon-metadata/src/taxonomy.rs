/// Fixed section taxonomy of the national-accounts table numbering.
const SECTION_TITLES: [&str; 8] = [
    "Domestic Product and Income",
    "Personal Income and Outlays",
    "Government Current Receipts and Expenditures",
    "Foreign Transactions",
    "Saving and Investment",
    "Income and Employment by Industry",
    "Supplemental Tables",
    "Not Seasonally Adjusted Tables",
];

/// Title for a section number, falling back to a generic `"Section N"`
/// label for numbers outside the taxonomy.
pub fn section_label(section: u32) -> String {
    match section {
        1..=8 => SECTION_TITLES[(section - 1) as usize].to_string(),
        n => format!("Section {n}"),
    }
}
