//! Commercial-offer message and chat link for WhatsApp.

use crate::engine::money::{round_money, to_decimal};
use crate::error::ExportError;
use crate::model::CalculationResult;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::Deserialize;

const DEFAULT_CLIENT: &str = "Уважаемый клиент";
const DEFAULT_MANAGER: &str = "Менеджер MOSPOOL";
const DEFAULT_MANAGER_PHONE: &str = "+7 (985) 200-00-41";
const COMPANY_FOOTER: &str = "MOSPOOL - Проектирование и строительство бассейнов\nwww.mos-pool.ru";
const LISTED_SECTIONS: usize = 5;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub manager_name: Option<String>,
    pub manager_phone: Option<String>,
}

/// Digits only, Russian country code `7` first.
///
/// A leading trunk `8` becomes `7`; numbers without a leading `7` get one.
/// Empty input stays empty.
#[must_use]
pub fn format_phone_for_whatsapp(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return digits;
    }
    if let Some(rest) = digits.strip_prefix('8') {
        return format!("7{rest}");
    }
    if digits.starts_with('7') {
        digits
    } else {
        format!("7{digits}")
    }
}

/// Formats an amount the ru-RU way: non-breaking-space thousands groups,
/// comma decimals, at most two of them.
#[must_use]
pub fn format_rub(amount: f64) -> String {
    let cents = (round_money(to_decimal(amount).abs()) * Decimal::ONE_HUNDRED)
        .to_u64()
        .unwrap_or(u64::MAX);
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::new();
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}{grouped}")
    } else {
        let decimals = format!("{fraction:02}");
        format!("{sign}{grouped},{}", decimals.trim_end_matches('0'))
    }
}

/// Plain-text offer summarizing `result` for the client.
#[must_use]
pub fn whatsapp_message(client: &ClientInfo, result: &CalculationResult) -> String {
    let client_name = client.name.as_deref().unwrap_or(DEFAULT_CLIENT);
    let manager_name = client.manager_name.as_deref().unwrap_or(DEFAULT_MANAGER);
    let manager_phone = client
        .manager_phone
        .as_deref()
        .unwrap_or(DEFAULT_MANAGER_PHONE);
    let sections = result.sections();
    let bullets: Vec<String> = sections
        .iter()
        .take(LISTED_SECTIONS)
        .map(|section| format!("• {section}"))
        .collect();

    format!(
        "Здравствуйте, {client_name}!

Подготовил для вас коммерческое предложение на строительство бассейна.

📊 *Общая стоимость: {total} ₽*

Смета включает {items} позиций в {categories} категориях:
{bullets}

PDF-файл с подробной сметой отправлю следующим сообщением.

Свяжитесь со мной для уточнения деталей и согласования сроков выполнения.

С уважением,
{manager_name}
{manager_phone}

---
{COMPANY_FOOTER}",
        total = format_rub(result.total),
        items = result.items.len(),
        categories = sections.len(),
        bullets = bullets.join("\n"),
    )
}

/// Chat link that opens `message` addressed to `phone`.
///
/// # Errors
///
/// Returns [`ExportError::InvalidPhone`] when fewer than 11 digits remain
/// after formatting.
pub fn whatsapp_url(phone: &str, message: &str) -> Result<String, ExportError> {
    let formatted = format_phone_for_whatsapp(phone);
    if formatted.len() < 11 {
        return Err(ExportError::InvalidPhone {
            phone: phone.to_string(),
        });
    }
    Ok(format!(
        "https://api.whatsapp.com/send?phone={formatted}&text={}",
        urlencoding::encode(message)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EstimateEngine;
    use crate::model::CalculationContext;
    use pretty_assertions::assert_eq;

    #[test]
    fn phone_normalization() {
        assert_eq!(format_phone_for_whatsapp("8 (985) 200-00-41"), "79852000041");
        assert_eq!(format_phone_for_whatsapp("+7 985 200 00 41"), "79852000041");
        assert_eq!(format_phone_for_whatsapp("9852000041"), "79852000041");
        assert_eq!(format_phone_for_whatsapp(""), "");
    }

    #[test]
    fn amounts_group_by_thousands() {
        assert_eq!(format_rub(684_730.0), "684\u{a0}730");
        assert_eq!(format_rub(1_234_567.5), "1\u{a0}234\u{a0}567,5");
        assert_eq!(format_rub(999.0), "999");
        assert_eq!(format_rub(0.0), "0");
        assert_eq!(format_rub(1.005), "1,01");
    }

    #[test]
    fn message_lists_sections_and_defaults() {
        let result = EstimateEngine::default().calculate(&CalculationContext::default());
        let message = whatsapp_message(&ClientInfo::default(), &result);
        assert!(message.starts_with("Здравствуйте, Уважаемый клиент!\n\n"));
        assert!(message.contains("Смета включает 10 позиций в 4 категориях:"));
        assert!(message.contains("• Земляные работы\n• Бетонные работы\n"));
        assert!(message.contains(&format_rub(result.total)));
        assert!(message.ends_with("www.mos-pool.ru"));
    }

    #[test]
    fn url_requires_full_number() {
        assert!(matches!(
            whatsapp_url("12-34", "hi"),
            Err(ExportError::InvalidPhone { .. })
        ));
        let url = whatsapp_url("89852000041", "Итого: 1 ₽").unwrap();
        assert!(url.starts_with("https://api.whatsapp.com/send?phone=79852000041&text="));
        assert!(!url.contains(' '));
    }
}
