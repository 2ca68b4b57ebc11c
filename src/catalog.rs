//! Static content catalog for the showcase galleries.
//!
//! Four sections, each a fixed list of [`CatalogEntry`] records. The data is
//! authored here and never mutated; pages are rendered straight from it.

use crate::locale::TextKey;
use serde::Serialize;

/// Shown when an entry's image fails to load in the browser.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1491553895911-0055eca6402d?q=80&w=1200&auto=format&fit=crop";

/// A place, tradition, wellness practice or cultural topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub title: &'static str,
    /// One-line card caption.
    pub summary: &'static str,
    pub image: &'static str,
    /// Long text shown in the "Know more" panel.
    pub description: &'static str,
    pub fun_fact: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Heritage,
    Tradition,
    Wellness,
    Culture,
}

impl Section {
    /// Home page order.
    pub const ALL: [Section; 4] = [
        Section::Heritage,
        Section::Tradition,
        Section::Wellness,
        Section::Culture,
    ];

    /// Directory name of the section page in the generated site.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Heritage => "heritage",
            Section::Tradition => "dates",
            Section::Wellness => "wellness",
            Section::Culture => "culture",
        }
    }

    pub fn title_key(self) -> TextKey {
        match self {
            Section::Heritage => TextKey::NavHeritage,
            Section::Tradition => TextKey::NavDates,
            Section::Wellness => TextKey::NavWellness,
            Section::Culture => TextKey::NavCulture,
        }
    }

    pub fn card_key(self) -> TextKey {
        match self {
            Section::Heritage => TextKey::CardHeritage,
            Section::Tradition => TextKey::CardTradition,
            Section::Wellness => TextKey::CardWellness,
            Section::Culture => TextKey::CardCulture,
        }
    }

    fn position(self) -> usize {
        match self {
            Section::Heritage => 0,
            Section::Tradition => 1,
            Section::Wellness => 2,
            Section::Culture => 3,
        }
    }

    /// The section before this one. `None` for the first, whose previous
    /// page is home.
    pub fn previous(self) -> Option<Section> {
        self.position()
            .checked_sub(1)
            .map(|i| Section::ALL[i])
    }

    /// The section after this one. `None` for the last.
    pub fn next(self) -> Option<Section> {
        Section::ALL.get(self.position() + 1).copied()
    }

    pub fn entries(self) -> &'static [CatalogEntry] {
        match self {
            Section::Heritage => HERITAGE,
            Section::Tradition => TRADITION,
            Section::Wellness => WELLNESS,
            Section::Culture => CULTURE,
        }
    }
}

const HERITAGE: &[CatalogEntry] = &[
    CatalogEntry {
        title: "Nizwa Fort",
        summary: "17th century fortress and UNESCO World Heritage site",
        image: "https://images.pexels.com/photos/30833907/pexels-photo-30833907.jpeg?auto=compress&cs=tinysrgb&w=1200",
        description: "Nizwa Fort, completed in the 1650s under Imam Sultan Bin Saif Al Ya'rubi, stands over an underground spring. With a massive drum tower, deep foundations, and 360° cannon placements, it's Oman's most visited national monument.",
        fun_fact: "Despite its robust structure, the fort stands atop an underground stream, making the interior surprisingly cool—nature's air-conditioning!",
    },
    CatalogEntry {
        title: "Bahla Fort",
        summary: "Ancient mud-brick fortress, UNESCO World Heritage",
        image: "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/16/c7/8a/72/festung-hisn-tamah.jpg?w=1200&h=1200&s=1",
        description: "Bahla Fort is a UNESCO World Heritage Site, built by the Banu Nebhan tribe between the 12th–15th centuries. Enclosed by a perimeter wall of 13 km, it exemplifies defensive oasis architecture.",
        fun_fact: "Locals say ghostly silhouettes are occasionally seen at night—so it tops the charts for 'spooky forts' in Oman!",
    },
    CatalogEntry {
        title: "Aflaj Irrigation Systems",
        summary: "UNESCO ancient water management system",
        image: "https://media.istockphoto.com/id/1136146449/photo/aflaj-falaj-water-system-in-oman.jpg?s=612x612&w=0&k=20&c=2oU8I_lPztGG0QSzj8EM1ZqK_QUt0OMK0Mvy40uMXPQ=",
        description: "The Aflaj are ancient underground water channels that have irrigated Oman's deserts for centuries. Recognized by UNESCO, many still supply water to villages even today.",
        fun_fact: "Some of these systems have been running for over 1,000 years—making them the world's longest continuously used irrigation networks!",
    },
    CatalogEntry {
        title: "Jabrin Castle",
        summary: "Beautiful castle with intricate interiors",
        image: "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/05/ae/5f/e8/jibreen-castle.jpg?w=900&h=500&s=1",
        description: "Built in 1670 by Imam Bil'arab bin Sultan, Jabrin Castle is famed for its ornate interiors—wood-carved ceilings, painted stucco, and scholarly halls for medicine, theology, and astrology.",
        fun_fact: "Legend says one room is haunted by a scholar's restless spirit—who needs a nighttime visit to solve the mysteries within.",
    },
    CatalogEntry {
        title: "Al Baleed Archaeological Park",
        summary: "UNESCO World Heritage Site in Salalah",
        image: "https://upload.wikimedia.org/wikipedia/commons/c/cb/Al_Balid_Archeological_Park_5.jpg",
        description: "Al Baleed Archaeological Park was a flourishing port in the frankincense trade. Now part of a UNESCO site, visitors can explore ruins of mosques, walls, and the Frankincense Museum.",
        fun_fact: "Frankincense traded here was once worth its weight in gold—literally making Salalah one of the wealthiest ports in the ancient world.",
    },
    CatalogEntry {
        title: "Mutrah Corniche & Souq",
        summary: "Picturesque waterfront and traditional market",
        image: "https://media1.thrillophilia.com/filestore/7do8xa1heiw5c5384iyc0bkybbo3_10-5-20_Oman-banner-scaled.jpeg",
        description: "Mutrah Corniche is a scenic seawall promenade in Muscat, home to one of the oldest souqs in the Arab world. It's alive with merchants, traditional crafts, and port views.",
        fun_fact: "A few souq shops are still owned by families that have run them for over five centuries—talk about heritage in action!",
    },
];

const TRADITION: &[CatalogEntry] = &[
    CatalogEntry {
        title: "Khalas Dates",
        summary: "Caramel-like, prized in Oman",
        image: "https://5.imimg.com/data5/OS/CN/MY-4561887/oman-dates.jpg",
        description: "Khalas dates are Oman's most prized variety, known for their caramel-like sweetness and soft texture. Grown primarily in the Al Batinah region, they're considered the 'king of dates' in Omani culture.",
        fun_fact: "Khalas dates are so revered that they're often used as gifts during Ramadan and special occasions—Oman's version of luxury chocolate!",
    },
    CatalogEntry {
        title: "Fard Dates",
        summary: "Firm texture, rich sweetness",
        image: "https://static.dilligrocery.com/264-large_default/oman-dates.jpg",
        description: "Fard dates are known for their firm texture and rich, concentrated sweetness. These dates are perfect for cooking and are often used in traditional Omani desserts and savory dishes.",
        fun_fact: "Fard dates are so firm they can be stored for months without refrigeration—nature's perfect snack for desert travelers!",
    },
    CatalogEntry {
        title: "Naghal Dates",
        summary: "Golden and soft",
        image: "https://safadryfruitsandspices.com/wp-content/uploads/2023/10/Add-a-subheading-4.jpg",
        description: "Naghal dates are distinguished by their golden color and exceptionally soft texture. These premium dates are often served to guests as a symbol of Omani hospitality and generosity.",
        fun_fact: "Naghal dates are so soft they practically melt in your mouth—earning them the nickname 'butter dates' among locals!",
    },
    CatalogEntry {
        title: "Madina Dates",
        summary: "Dark and syrupy",
        image: "https://m.media-amazon.com/images/I/51P-GfjbuNL.jpg",
        description: "Madina dates are known for their dark color and syrupy sweetness. These dates are rich in natural sugars and are often used in traditional Omani medicine and energy-boosting recipes.",
        fun_fact: "Madina dates are so sweet they were historically used as natural sweeteners before sugar became widely available—Oman's original candy!",
    },
    CatalogEntry {
        title: "Khenaizi Dates",
        summary: "Reddish-brown, medium sweetness",
        image: "https://www.houseofrasda.com/cdn/shop/files/Oman_Dates_Fard_Khajur_Premium_1.png?v=1746272251",
        description: "Khenaizi dates are characterized by their reddish-brown color and balanced sweetness. These versatile dates are popular for both fresh consumption and in traditional Omani cooking.",
        fun_fact: "Khenaizi dates are often called 'the people's date' because they're affordable yet delicious—democracy in date form!",
    },
    CatalogEntry {
        title: "Mabroom Dates",
        summary: "Elongated, premium quality",
        image: "https://images.jdmagicbox.com/quickquotes/images_main/urban-platter-omani-fardh-dates-from-oman-500g-04-08-2021-080-239867177-60k4h.jpg",
        description: "Mabroom dates are prized for their elongated shape and premium quality. These dates are often exported and are considered one of Oman's finest agricultural products.",
        fun_fact: "Mabroom dates are so premium they're often given as diplomatic gifts—Oman's answer to fine wine!",
    },
];

const WELLNESS: &[CatalogEntry] = &[
    CatalogEntry {
        title: "Frankincense Therapy",
        summary: "Boswellia sacra from Dhofar",
        image: "https://m.media-amazon.com/images/I/81awtFxv+BL._UF1000,1000_QL80_.jpg",
        description: "Frankincense from Dhofar's Boswellia sacra trees has been used for centuries in traditional Omani wellness practices. Its aromatic resin is believed to have healing properties for both body and mind.",
        fun_fact: "The frankincense trees in Dhofar are so precious that they're protected by law—Oman's version of a natural pharmacy!",
    },
    CatalogEntry {
        title: "Traditional Healing",
        summary: "Ancient remedies and practices",
        image: "https://gosalalahtour.com/wp-content/uploads/2021/06/Frankincense-Salalah-Dhofar.png",
        description: "Omani traditional healing combines herbal medicine, spiritual practices, and natural remedies passed down through generations. These holistic approaches focus on treating the whole person, not just symptoms.",
        fun_fact: "Some traditional healers in Oman can trace their knowledge back over 500 years—making them living medical libraries!",
    },
    CatalogEntry {
        title: "Wadi Oases & Springs",
        summary: "Natural healing waters",
        image: "https://images.unsplash.com/photo-1558980664-10ea3f8a2d4b?q=80&w=1200&auto=format&fit=crop",
        description: "Oman's wadis and natural springs are considered sacred healing places. The mineral-rich waters and serene environments provide natural therapy for both physical and mental wellness.",
        fun_fact: "Some wadi springs are believed to have healing properties—locals say a dip can cure everything from stress to skin conditions!",
    },
    CatalogEntry {
        title: "Spa Traditions",
        summary: "Modern wellness inspired by heritage",
        image: "https://images.unsplash.com/photo-1556228453-efd1bff71f6b?q=80&w=1200&auto=format&fit=crop",
        description: "Modern Omani spas blend contemporary wellness techniques with traditional practices. Treatments often include frankincense, rose water, and other natural ingredients from Oman's rich heritage.",
        fun_fact: "Some luxury spas in Oman offer 'desert therapy' sessions—wellness meets adventure in the most unique way!",
    },
    CatalogEntry {
        title: "Meditation & Mindfulness",
        summary: "Ancient practices for modern life",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?q=80&w=1200&auto=format&fit=crop",
        description: "Oman's peaceful landscapes and spiritual heritage make it an ideal destination for meditation and mindfulness practices. Many retreats offer traditional and modern approaches to mental wellness.",
        fun_fact: "The silence in Oman's deserts is so profound it's been measured as one of the quietest places on Earth—perfect for deep meditation!",
    },
    CatalogEntry {
        title: "Natural Hot Springs",
        summary: "Thermal healing waters",
        image: "https://images.unsplash.com/photo-1544551763-7ef4203b1cb9?q=80&w=1200&auto=format&fit=crop",
        description: "Oman's natural hot springs are rich in minerals and have been used for therapeutic purposes for centuries. These geothermal waters provide natural healing and relaxation experiences.",
        fun_fact: "Some hot springs in Oman are so hot they can cook eggs—nature's own wellness spa with built-in kitchen!",
    },
];

const CULTURE: &[CatalogEntry] = &[
    CatalogEntry {
        title: "Traditional Dress",
        summary: "Dishdasha, kumma and attire",
        image: "https://www.shutterstock.com/image-photo/arab-middleeastern-man-wearing-emirati-600nw-2373888367.jpg",
        description: "Omani traditional dress reflects the country's rich cultural heritage. The dishdasha (long white robe) and kumma (embroidered cap) are symbols of elegance and cultural identity, worn with pride by men across the country.",
        fun_fact: "The dishdasha is so iconic that it's been worn virtually unchanged for over 1,000 years—talk about timeless fashion!",
    },
    CatalogEntry {
        title: "Trading Heritage",
        summary: "Muttrah Souq and maritime commerce",
        image: "https://a.travel-assets.com/findyours-php/viewfinder/images/res70/59000/59865-Muttrah-Souq.jpg",
        description: "Oman's trading heritage spans centuries, with Muttrah Souq being one of the oldest markets in the Arab world. The country's strategic location made it a crucial hub for maritime commerce and cultural exchange.",
        fun_fact: "Some souq merchants can trace their family businesses back over 500 years—making them living links to Oman's trading past!",
    },
    CatalogEntry {
        title: "Festivals & Arts",
        summary: "Music, dance, cultural celebrations",
        image: "https://shabiba.eu-central-1.linodeobjects.com/2019/01/8/989238.jpg",
        description: "Omani festivals and arts showcase the country's vibrant cultural traditions. From traditional music and dance to contemporary celebrations, these events bring communities together and preserve cultural heritage.",
        fun_fact: "The Muscat Festival is so popular it attracts over 2 million visitors annually—Oman's version of a cultural supernova!",
    },
    CatalogEntry {
        title: "Vision 2040",
        summary: "Oman's future while honoring heritage",
        image: "https://www.omanobserver.om/omanobserver/uploads/images/2022/07/20/2058409.jpg",
        description: "Oman Vision 2040 represents the country's ambitious plan for sustainable development while preserving its rich cultural heritage. It balances modernization with traditional values and environmental conservation.",
        fun_fact: "Vision 2040 aims to make Oman one of the world's most sustainable countries—proving that progress and heritage can go hand in hand!",
    },
    CatalogEntry {
        title: "Cuisine & Hospitality",
        summary: "Traditional flavors and warm welcome",
        image: "https://res.cloudinary.com/ddjuftfy2/image/upload/f_webp,c_fill,q_auto/memphis/large/02fb692ff2031a37bfba9f3e7872fce4.jpg",
        description: "Omani cuisine reflects the country's diverse cultural influences and abundant natural resources. From aromatic biryanis to fresh seafood, Omani food is a celebration of flavors, spices, and traditional cooking methods.",
        fun_fact: "Omani hospitality is so legendary that guests are often treated like family—even strangers receive the warmest welcome!",
    },
    CatalogEntry {
        title: "Language & Literature",
        summary: "Arabic poetry and storytelling traditions",
        image: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?q=80&w=1200&auto=format&fit=crop",
        description: "Oman's literary heritage includes rich traditions of Arabic poetry, storytelling, and oral history. These cultural expressions have been passed down through generations, preserving the country's linguistic and narrative traditions.",
        fun_fact: "Some Omani poets are so revered that their verses are still recited at weddings and celebrations centuries after their death!",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_section_has_six_entries() {
        for section in Section::ALL {
            assert_eq!(section.entries().len(), 6, "{section:?}");
        }
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = Section::ALL.iter().map(|s| s.slug()).collect();
        assert_eq!(slugs.len(), Section::ALL.len());
    }

    #[test]
    fn entries_are_fully_authored() {
        for section in Section::ALL {
            for entry in section.entries() {
                assert!(!entry.title.is_empty());
                assert!(!entry.summary.is_empty());
                assert!(!entry.description.is_empty());
                assert!(!entry.fun_fact.is_empty());
                assert!(entry.image.starts_with("https://"), "{}", entry.title);
            }
        }
    }

    #[test]
    fn sections_chain_in_home_page_order() {
        assert_eq!(Section::Heritage.previous(), None);
        assert_eq!(Section::Heritage.next(), Some(Section::Tradition));
        assert_eq!(Section::Wellness.previous(), Some(Section::Tradition));
        assert_eq!(Section::Culture.next(), None);
        for pair in Section::ALL.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[1].previous(), Some(pair[0]));
        }
    }

    #[test]
    fn tradition_section_lives_under_dates() {
        assert_eq!(Section::Tradition.slug(), "dates");
        assert_eq!(Section::Tradition.entries()[0].title, "Khalas Dates");
    }
}
