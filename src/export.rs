use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::types::FighterPair;

/// Write the fight card to a two-column xlsx file: bold header row
/// `fighter 1 | fighter 2`, one data row per pair in input order, both
/// columns at a fixed width. Returns the filename used.
pub fn write_xlsx(pairs: &[FighterPair], filename: &str) -> Result<String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Fight Card")?;

    let bold = Format::new().set_bold();
    worksheet.write_string_with_format(0, 0, "fighter 1", &bold)?;
    worksheet.write_string_with_format(0, 1, "fighter 2", &bold)?;

    for (i, pair) in pairs.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, pair.fighter1.as_str())?;
        worksheet.write_string(row, 1, pair.fighter2.as_str())?;
    }

    worksheet.set_column_width(0, 30)?;
    worksheet.set_column_width(1, 30)?;

    workbook.save(filename)?;
    Ok(filename.to_string())
}

/// Dump the fight card as pretty-printed JSON.
pub fn write_json(pairs: &[FighterPair], filename: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(pairs)?;
    std::fs::write(filename, json)?;
    Ok(())
}
