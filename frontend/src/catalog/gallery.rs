use crate::filter::{CatalogItem, Category};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryCategory {
    All,
    Simulators,
    Cars,
    Trucks,
    Facility,
    Students,
}

impl Category for GalleryCategory {
    const ALL: &'static [Self] = &[
        GalleryCategory::All,
        GalleryCategory::Simulators,
        GalleryCategory::Cars,
        GalleryCategory::Trucks,
        GalleryCategory::Facility,
        GalleryCategory::Students,
    ];

    fn label(self) -> &'static str {
        match self {
            GalleryCategory::All => "All Photos",
            GalleryCategory::Simulators => "Simulators",
            GalleryCategory::Cars => "Cars",
            GalleryCategory::Trucks => "Trucks",
            GalleryCategory::Facility => "Facility",
            GalleryCategory::Students => "Students",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    /// File name under the asset base.
    pub file: &'static str,
    pub alt: &'static str,
    pub tags: &'static [GalleryCategory],
}

impl CatalogItem for GalleryImage {
    type Category = GalleryCategory;

    fn has_category(&self, category: GalleryCategory) -> bool {
        self.tags.contains(&category)
    }

    fn searchable_text(&self) -> String {
        self.alt.to_string()
    }
}

use GalleryCategory::{Cars, Facility, Simulators, Students, Trucks};

pub static GALLERY_IMAGES: [GalleryImage; 12] = [
    GalleryImage { file: "hero-driving.jpg", alt: "On-road training session in Lucknow", tags: &[Cars, Students] },
    GalleryImage { file: "simulator-training.jpg", alt: "Advanced driving simulator training", tags: &[Simulators, Students] },
    GalleryImage { file: "on-road-training.jpg", alt: "Professional car driving instruction", tags: &[Cars, Students] },
    GalleryImage { file: "truck-training.jpg", alt: "Heavy truck training vehicle", tags: &[Trucks] },
    GalleryImage { file: "school-building.jpg", alt: "Master Motor Training College building", tags: &[Facility] },
    GalleryImage { file: "instructor-1.jpg", alt: "Professional driving instructor", tags: &[Facility] },
    GalleryImage { file: "instructor-2.jpg", alt: "Experienced trainer", tags: &[Facility] },
    GalleryImage { file: "instructor-3.jpg", alt: "Young instructor", tags: &[Facility] },
    GalleryImage { file: "hero-driving.jpg", alt: "City driving practice", tags: &[Cars, Students] },
    GalleryImage { file: "simulator-training.jpg", alt: "Simulator cockpit view", tags: &[Simulators] },
    GalleryImage { file: "truck-training.jpg", alt: "Commercial vehicle training", tags: &[Trucks] },
    GalleryImage { file: "on-road-training.jpg", alt: "Student learning to drive", tags: &[Cars, Students] },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{visible_items, FilterState};

    #[test]
    fn trucks_tab_shows_two_images() {
        let mut state: FilterState<GalleryCategory> = FilterState::default();
        state.select_category(GalleryCategory::Trucks, &GALLERY_IMAGES);
        let trucks = visible_items(&GALLERY_IMAGES, &state);
        assert_eq!(trucks.len(), 2);
        assert_eq!(trucks[0].0, 3);
        assert_eq!(trucks[1].0, 10);
    }

    #[test]
    fn all_photos_is_the_whole_catalog() {
        let state: FilterState<GalleryCategory> = FilterState::default();
        assert_eq!(visible_items(&GALLERY_IMAGES, &state).len(), GALLERY_IMAGES.len());
    }

    #[test]
    fn multi_tag_image_appears_under_each_tag() {
        let mut state: FilterState<GalleryCategory> = FilterState::default();
        state.select_category(GalleryCategory::Students, &GALLERY_IMAGES);
        let students: Vec<usize> = visible_items(&GALLERY_IMAGES, &state).iter().map(|(i, _)| *i).collect();
        assert_eq!(students, vec![0, 1, 2, 8, 11]);

        state.select_category(GalleryCategory::Cars, &GALLERY_IMAGES);
        let cars: Vec<usize> = visible_items(&GALLERY_IMAGES, &state).iter().map(|(i, _)| *i).collect();
        assert_eq!(cars, vec![0, 2, 8, 11]);
    }

    #[test]
    fn category_without_photos_is_empty() {
        let only_facility = [GALLERY_IMAGES[4].clone(), GALLERY_IMAGES[5].clone()];
        let mut state: FilterState<GalleryCategory> = FilterState::default();
        state.select_category(GalleryCategory::Trucks, &only_facility);
        assert!(visible_items(&only_facility, &state).is_empty());
    }
}
