pub const BUSINESS_NAME: &str = "Master Motor Training College";
pub const ESTABLISHED: i32 = 1965;

/// Dialable form used in `tel:` links.
pub const PHONE_DIAL: &str = "+918090528020";
pub const PHONE_DISPLAY: &str = "+91 80905 28020";
/// WhatsApp number as `wa.me` expects it: country code, no `+`.
pub const WHATSAPP_NUMBER: &str = "918090528020";
pub const EMAIL: &str = "info@mastermotortraining.com";

pub const ADDRESS: &str = "Guru Teg Bahadur Plaza 1, Station Road, Husainganj Crossing, Near Hotel Mera Mann, Lucknow, Uttar Pradesh 226001";
pub const HOURS_WEEKDAYS: &str = "Monday - Saturday: 8:00 AM - 7:00 PM";
pub const HOURS_SUNDAY: &str = "Sunday: 9:00 AM - 5:00 PM";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d377.61179573281913!2d80.93467554276614!3d26.839285455675483!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x399bfdac4cd619cf%3A0x8a1010769d8d7c9e!2sMaster%20Motor%20Training%20College!5e1!3m2!1sen!2sin!4v1769064596627!5m2!1sen!2sin";
pub const MAP_PLACE_URL: &str = "https://www.google.com/maps/place/Master+Motor+Training+College/@26.8392855,80.9346755,19z/";
pub const FACEBOOK_URL: &str = "https://facebook.com/MasterMotorTrainingCollege";

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/assets"  // Served by trunk from frontend/assets
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "/assets"  // Production URL
}

pub fn asset(file: &str) -> String {
    format!("{}/{}", get_asset_base(), file.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_join_once() {
        assert_eq!(asset("hero-driving.jpg"), "/assets/hero-driving.jpg");
        assert_eq!(asset("/truck-training.jpg"), "/assets/truck-training.jpg");
    }

    #[test]
    fn every_referenced_image_ships_in_assets() {
        use crate::catalog::{courses, gallery, people};

        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let referenced = gallery::GALLERY_IMAGES
            .iter()
            .map(|image| image.file)
            .chain(courses::COURSES.iter().map(|course| course.image))
            .chain(courses::HOME_COURSES.iter().map(|course| course.image))
            .chain(people::INSTRUCTORS.iter().map(|instructor| instructor.image))
            .chain(["hero-driving.jpg", "simulator-training.jpg", "on-road-training.jpg"]);
        for file in referenced {
            assert!(dir.join(file).is_file(), "missing asset: {}", file);
        }
    }

    #[test]
    fn whatsapp_number_is_dial_number_without_plus() {
        assert_eq!(format!("+{}", WHATSAPP_NUMBER), PHONE_DIAL);
    }
}
