//! Outbound links: phone, mail and WhatsApp deep links.
//!
//! The contact form never talks to a server. Submitting it serializes the
//! fields into a WhatsApp message and hands off to the messaging app.

use crate::config;

pub const GENERAL_INQUIRY: &str = "Inquiry about driving courses";

pub fn tel_link() -> String {
    format!("tel:{}", config::PHONE_DIAL)
}

pub fn mailto_link() -> String {
    format!("mailto:{}", config::EMAIL)
}

/// Chat link with no prefilled text.
pub fn whatsapp_chat() -> String {
    format!("https://wa.me/{}", config::WHATSAPP_NUMBER)
}

/// `wa.me` deep link carrying `text` percent-encoded.
pub fn whatsapp_link(text: &str) -> String {
    format!("{}?text={}", whatsapp_chat(), urlencoding::encode(text))
}

pub fn enroll_link(course_title: &str) -> String {
    whatsapp_link(&format!("I want to enroll in {}", course_title))
}

pub fn book_session_link(instructor_name: &str) -> String {
    whatsapp_link(&format!("I want to book a session with {}", instructor_name))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub course: String,
    pub message: String,
}

/// Form field being edited, so one callback can update any of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Course,
    Message,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Phone => self.phone = value,
            ContactField::Email => self.email = value,
            ContactField::Course => self.course = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Name and phone are the required fields.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }

    pub fn to_message(&self) -> String {
        format!(
            "Name: {}\nPhone: {}\nEmail: {}\nCourse: {}\nMessage: {}",
            self.name, self.phone, self.email, self.course, self.message
        )
    }

    pub fn inquiry_link(&self) -> String {
        whatsapp_link(&self.to_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_links() {
        assert_eq!(tel_link(), "tel:+918090528020");
        assert_eq!(mailto_link(), "mailto:info@mastermotortraining.com");
        assert_eq!(whatsapp_chat(), "https://wa.me/918090528020");
    }

    #[test]
    fn whatsapp_text_is_percent_encoded() {
        assert_eq!(
            whatsapp_link(GENERAL_INQUIRY),
            "https://wa.me/918090528020?text=Inquiry%20about%20driving%20courses"
        );
        let link = whatsapp_link("a&b=c\nd");
        assert!(link.ends_with("?text=a%26b%3Dc%0Ad"), "{}", link);
    }

    #[test]
    fn enroll_link_names_the_course() {
        assert_eq!(
            enroll_link("Truck Driving Course"),
            "https://wa.me/918090528020?text=I%20want%20to%20enroll%20in%20Truck%20Driving%20Course"
        );
    }

    #[test]
    fn book_session_names_the_instructor() {
        assert!(book_session_link("Surjit Singh").ends_with("with%20Surjit%20Singh"));
    }

    #[test]
    fn contact_form_serializes_in_field_order() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Priya".to_string());
        form.set(ContactField::Phone, "+91 99999 00000".to_string());
        form.set(ContactField::Course, "Simulator Training".to_string());
        form.set(ContactField::Message, "Evening slot?".to_string());

        assert_eq!(
            form.to_message(),
            "Name: Priya\nPhone: +91 99999 00000\nEmail: \nCourse: Simulator Training\nMessage: Evening slot?"
        );
        let link = form.inquiry_link();
        assert!(link.starts_with("https://wa.me/918090528020?text=Name%3A%20Priya%0APhone%3A%20%2B91"));
    }

    #[test]
    fn contact_form_needs_name_and_phone() {
        let mut form = ContactForm::default();
        assert!(!form.is_complete());
        form.set(ContactField::Name, "Rahul".to_string());
        assert!(!form.is_complete());
        form.set(ContactField::Phone, "   ".to_string());
        assert!(!form.is_complete());
        form.set(ContactField::Phone, "8090528020".to_string());
        assert!(form.is_complete());
    }
}
