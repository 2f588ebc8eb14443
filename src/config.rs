//! Business content for the site. The relay address, phone number and office
//! details are the firm's own and are not meant to be derived or "improved"
//! in code.

/// FormSubmit.co AJAX endpoint that relays contact submissions to the firm's
/// inbox.
pub fn get_form_endpoint() -> String {
    "https://formsubmit.co/ajax/Davidattorney2001@gmail.com".to_string()
}

/// Number shown to users when a submission cannot be delivered.
pub const FALLBACK_PHONE: &str = "+1 (313) 213-8960";

pub const OFFICE_ADDRESS: &str = "500 Griswold St, Suite 2400, Detroit, MI 48226";

pub const OFFICE_HOURS: &str = "Mon\u{2013}Fri 8:30am\u{2013}6:00pm";
