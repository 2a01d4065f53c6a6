//! Company details and the outbound contact links built from them.

pub const BRAND: &str = "Auralink";
pub const BRAND_SUFFIX: &str = "Systems Limited";
pub const COMPANY_NAME: &str = "Auralink Systems Limited";

pub const PHONE_DISPLAY: &str = "+260 973 924 433";
pub const WHATSAPP_NUMBER: &str = "260973924433";
pub const EMAIL: &str = "hello@auralink.co.zm";
pub const LOCATION: &str = "Lusaka, Zambia";

const WHATSAPP_TEXT: &str = "Hello Auralink, I want to book a consultation.";
const EMAIL_SUBJECT: &str = "Auralink Consultation";
const EMAIL_BODY: &str = "Hi Auralink, I want to book a consultation.";

pub fn whatsapp_link(number: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(text))
}

pub fn mailto_link(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

pub fn consultation_whatsapp() -> String {
    whatsapp_link(WHATSAPP_NUMBER, WHATSAPP_TEXT)
}

pub fn consultation_email() -> String {
    mailto_link(EMAIL, EMAIL_SUBJECT, EMAIL_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_is_prefilled() {
        assert_eq!(
            consultation_whatsapp(),
            "https://wa.me/260973924433?text=Hello%20Auralink%2C%20I%20want%20to%20book%20a%20consultation."
        );
    }

    #[test]
    fn mailto_link_encodes_subject_and_body() {
        assert_eq!(
            consultation_email(),
            "mailto:hello@auralink.co.zm?subject=Auralink%20Consultation&body=Hi%20Auralink%2C%20I%20want%20to%20book%20a%20consultation."
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(
            mailto_link("a@b.c", "Q&A", "x=1?"),
            "mailto:a@b.c?subject=Q%26A&body=x%3D1%3F"
        );
    }
}
