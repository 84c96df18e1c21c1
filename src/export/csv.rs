use crate::error::ExportError;
use crate::model::CalculationResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes the estimate sheet: one row per item, then the summary rows.
pub fn write_csv<W: Write>(result: &CalculationResult, writer: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(["№", "Раздел", "Наименование", "Ед.", "Кол-во", "Цена", "Сумма"])?;

    for (idx, item) in result.items.iter().enumerate() {
        writer.write_record([
            &(idx + 1).to_string(),
            &item.section,
            &item.name,
            &item.unit,
            &item.quantity.to_string(),
            &item.price.to_string(),
            &item.total.to_string(),
        ])?;
    }

    let discount_label = format!("Скидка {}%", result.discount_percent);
    let summary = [
        ("Подытог", result.subtotal),
        (discount_label.as_str(), result.discount),
        ("НДС", result.tax),
        ("Итого", result.total),
    ];
    for (label, amount) in summary {
        writer.write_record(["", "", label, "", "", "", amount.to_string().as_str()])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

pub fn export_csv<P: AsRef<Path>>(result: &CalculationResult, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_csv(result, file)?;
    info!(path = %path_ref.display(), rows = result.items.len(), "estimate exported to CSV");

    Ok(())
}
