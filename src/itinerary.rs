//! Itinerary selection.
//!
//! Five pre-authored plans, picked from the traveller's duration bucket:
//!
//! | Bucket | Label | Days |
//! |---|---|---|
//! | `short` | 3-4 Days | 4 |
//! | `medium` | 5-6 Days | 5 |
//! | `full` | 7-8 Days | 7 |
//! | `extended` | 10-12 Days | 8 (full plan + Salalah) |
//! | `comprehensive` | 14+ Days | 9 (extended plan + Musandam) |
//!
//! Selection by label is a substring match checked in the order of the table
//! above; the first hit wins. Anything that matches nothing, including an
//! absent label, gets the full 7-day plan. Every lookup resolves to a plan.
//!
//! [`DurationBucket`] is the stable key behind the labels. Display text can
//! change (or be translated) without touching which plan a traveller gets,
//! as long as callers go through the typed entry points.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum DurationBucket {
    Short,
    Medium,
    Full,
    Extended,
    Comprehensive,
}

impl DurationBucket {
    /// Shortest to longest. Also the substring match priority.
    pub const ALL: [DurationBucket; 5] = [
        DurationBucket::Short,
        DurationBucket::Medium,
        DurationBucket::Full,
        DurationBucket::Extended,
        DurationBucket::Comprehensive,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DurationBucket::Short => "short",
            DurationBucket::Medium => "medium",
            DurationBucket::Full => "full",
            DurationBucket::Extended => "extended",
            DurationBucket::Comprehensive => "comprehensive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DurationBucket::Short => "3-4 Days",
            DurationBucket::Medium => "5-6 Days",
            DurationBucket::Full => "7-8 Days",
            DurationBucket::Extended => "10-12 Days",
            DurationBucket::Comprehensive => "14+ Days",
        }
    }

    fn marker(self) -> &'static str {
        match self {
            DurationBucket::Short => "3-4",
            DurationBucket::Medium => "5-6",
            DurationBucket::Full => "7-8",
            DurationBucket::Extended => "10-12",
            DurationBucket::Comprehensive => "14+",
        }
    }

    /// Match a display label against the bucket markers, first hit wins.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| label.contains(b.marker()))
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == key)
    }

    /// Label lookup with the full plan as the fallback.
    pub fn resolve(label: Option<&str>) -> Self {
        label
            .and_then(Self::from_label)
            .unwrap_or(DurationBucket::Full)
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<DurationBucket> for &'static str {
    fn from(bucket: DurationBucket) -> Self {
        bucket.key()
    }
}

/// Accepts the stable key first, then falls back to label matching so that
/// links carrying display labels still decode.
impl TryFrom<String> for DurationBucket {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_key(&value)
            .or_else(|| Self::from_label(&value))
            .ok_or_else(|| format!("unknown duration '{value}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// Time of day, e.g. "Morning".
    pub time: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tip: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    /// 1-based position within the plan.
    pub day: u32,
    pub title: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub highlights: &'static [&'static str],
    pub activities: &'static [Activity],
    pub accommodation: &'static str,
    pub transportation: &'static str,
    pub meals: &'static str,
}

/// Ordered days of the selected plan. Day indices run `1..=len` without gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItineraryPlan {
    pub bucket: DurationBucket,
    pub days: Vec<&'static DayPlan>,
}

impl ItineraryPlan {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn contains_day(&self, day: u32) -> bool {
        day >= 1 && (day as usize) <= self.days.len()
    }

    pub fn day(&self, day: u32) -> Option<&'static DayPlan> {
        if !self.contains_day(day) {
            return None;
        }
        self.days.get(day as usize - 1).copied()
    }
}

/// Per-person cost ranges for one duration bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetEstimate {
    pub budget: &'static str,
    pub mid_range: &'static str,
    pub luxury: &'static str,
}

/// Select the plan for a duration label. Total: unknown or absent labels get
/// the 7-day plan.
pub fn select_itinerary(days_label: Option<&str>) -> ItineraryPlan {
    select_plan(DurationBucket::resolve(days_label))
}

pub fn select_plan(bucket: DurationBucket) -> ItineraryPlan {
    let days: Vec<&'static DayPlan> = match bucket {
        DurationBucket::Short => SHORT_DAYS.iter().collect(),
        DurationBucket::Medium => MEDIUM_DAYS.iter().collect(),
        DurationBucket::Full => FULL_DAYS.iter().collect(),
        DurationBucket::Extended => FULL_DAYS.iter().chain([&SALALAH_DAY]).collect(),
        DurationBucket::Comprehensive => FULL_DAYS
            .iter()
            .chain([&SALALAH_DAY, &MUSANDAM_DAY])
            .collect(),
    };
    ItineraryPlan { bucket, days }
}

pub fn regions_covered(days_label: Option<&str>) -> &'static [&'static str] {
    regions_for(DurationBucket::resolve(days_label))
}

/// Each tier covers every region of the tier below it plus at least one more.
pub fn regions_for(bucket: DurationBucket) -> &'static [&'static str] {
    static ALL_REGIONS: [&str; 8] = [
        "Muscat",
        "Nizwa",
        "Wahiba Sands",
        "Sur",
        "Jebel Akhdar",
        "Ras al Jinz",
        "Salalah",
        "Musandam",
    ];
    let count = match bucket {
        DurationBucket::Short => 4,
        DurationBucket::Medium => 5,
        DurationBucket::Full => 6,
        DurationBucket::Extended => 7,
        DurationBucket::Comprehensive => 8,
    };
    &ALL_REGIONS[..count]
}

pub fn budget_estimate(days_label: Option<&str>) -> BudgetEstimate {
    budget_for(DurationBucket::resolve(days_label))
}

pub fn budget_for(bucket: DurationBucket) -> BudgetEstimate {
    match bucket {
        DurationBucket::Short => BudgetEstimate {
            budget: "OMR 180 - 260",
            mid_range: "OMR 380 - 520",
            luxury: "OMR 900 - 1,400",
        },
        DurationBucket::Medium => BudgetEstimate {
            budget: "OMR 230 - 320",
            mid_range: "OMR 480 - 650",
            luxury: "OMR 1,150 - 1,700",
        },
        DurationBucket::Full => BudgetEstimate {
            budget: "OMR 320 - 450",
            mid_range: "OMR 650 - 900",
            luxury: "OMR 1,600 - 2,400",
        },
        DurationBucket::Extended => BudgetEstimate {
            budget: "OMR 480 - 650",
            mid_range: "OMR 950 - 1,300",
            luxury: "OMR 2,300 - 3,300",
        },
        DurationBucket::Comprehensive => BudgetEstimate {
            budget: "OMR 620 - 850",
            mid_range: "OMR 1,250 - 1,700",
            luxury: "OMR 3,000 - 4,300",
        },
    }
}

// ============================================================================
// Authored plans
// ============================================================================

const IMG_MUSCAT: &str = "https://media1.thrillophilia.com/filestore/7do8xa1heiw5c5384iyc0bkybbo3_10-5-20_Oman-banner-scaled.jpeg";
const IMG_SOUQ: &str = "https://a.travel-assets.com/findyours-php/viewfinder/images/res70/59000/59865-Muttrah-Souq.jpg";
const IMG_NIZWA: &str = "https://images.pexels.com/photos/30833907/pexels-photo-30833907.jpeg?auto=compress&cs=tinysrgb&w=1200";
const IMG_BAHLA: &str = "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/16/c7/8a/72/festung-hisn-tamah.jpg?w=1200&h=1200&s=1";
const IMG_JABRIN: &str = "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/05/ae/5f/e8/jibreen-castle.jpg?w=900&h=500&s=1";
const IMG_AFLAJ: &str = "https://media.istockphoto.com/id/1136146449/photo/aflaj-falaj-water-system-in-oman.jpg?s=612x612&w=0&k=20&c=2oU8I_lPztGG0QSzj8EM1ZqK_QUt0OMK0Mvy40uMXPQ=";
const IMG_WADI: &str = "https://images.unsplash.com/photo-1558980664-10ea3f8a2d4b?q=80&w=1200&auto=format&fit=crop";
const IMG_SPRINGS: &str = "https://images.unsplash.com/photo-1544551763-7ef4203b1cb9?q=80&w=1200&auto=format&fit=crop";
const IMG_MOUNTAINS: &str = "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?q=80&w=1200&auto=format&fit=crop";
const IMG_DESERT: &str = "https://images.unsplash.com/photo-1491553895911-0055eca6402d?q=80&w=1200&auto=format&fit=crop";
const IMG_DATES: &str = "https://5.imimg.com/data5/OS/CN/MY-4561887/oman-dates.jpg";
const IMG_CUISINE: &str = "https://res.cloudinary.com/ddjuftfy2/image/upload/f_webp,c_fill,q_auto/memphis/large/02fb692ff2031a37bfba9f3e7872fce4.jpg";
const IMG_BALEED: &str = "https://upload.wikimedia.org/wikipedia/commons/c/cb/Al_Balid_Archeological_Park_5.jpg";
const IMG_FRANKINCENSE: &str = "https://gosalalahtour.com/wp-content/uploads/2021/06/Frankincense-Salalah-Dhofar.png";
const IMG_SPA: &str = "https://images.unsplash.com/photo-1556228453-efd1bff71f6b?q=80&w=1200&auto=format&fit=crop";

const DAY_MUSCAT_ARRIVAL: DayPlan = DayPlan {
    day: 1,
    title: "Arrival in the Capital",
    location: "Muscat",
    duration: "Full day",
    highlights: &[
        "Sultan Qaboos Grand Mosque",
        "Mutrah Corniche at sunset",
        "Mutrah Souq",
    ],
    activities: &[
        Activity {
            time: "Morning",
            name: "Sultan Qaboos Grand Mosque",
            description: "Walk the marble courtyards and see one of the largest hand-woven carpets in the world.",
            tip: "Visitors are admitted 8:00-11:00, Saturday to Thursday. Shoulders and knees must be covered.",
            image: IMG_MUSCAT,
        },
        Activity {
            time: "Afternoon",
            name: "Royal Opera House",
            description: "Join a guided tour of the opera house and its gardens in Shati Al Qurum.",
            tip: "Tours run most afternoons; check the schedule the day before.",
            image: IMG_MUSCAT,
        },
        Activity {
            time: "Evening",
            name: "Mutrah Corniche and Souq",
            description: "Stroll the seafront promenade, then lose yourself in the lanes of frankincense and silver.",
            tip: "Bargaining is expected in the souq. Start at around half the asking price.",
            image: IMG_SOUQ,
        },
    ],
    accommodation: "Boutique hotel in Mutrah or Qurum",
    transportation: "Airport taxi, then taxis or a rental car",
    meals: "Omani shuwa and mashuai at a corniche restaurant",
};

const DAY_NIZWA: DayPlan = DayPlan {
    day: 2,
    title: "Forts of the Interior",
    location: "Nizwa",
    duration: "Full day",
    highlights: &["Nizwa Fort", "Nizwa Souq", "Jabrin Castle"],
    activities: &[
        Activity {
            time: "Morning",
            name: "Nizwa Fort",
            description: "Climb the great drum tower built over an underground spring in the 1650s.",
            tip: "Arrive at opening time; the tower gets hot by late morning.",
            image: IMG_NIZWA,
        },
        Activity {
            time: "Afternoon",
            name: "Jabrin Castle",
            description: "Admire painted ceilings and the scholars' halls of Imam Bil'arab bin Sultan's palace.",
            tip: "Combine with Bahla Fort, fifteen minutes away, if time allows.",
            image: IMG_JABRIN,
        },
        Activity {
            time: "Evening",
            name: "Nizwa Souq",
            description: "Browse pottery, khanjar daggers and the date stalls of the old market.",
            tip: "On Friday mornings the livestock market is worth an early start.",
            image: IMG_DATES,
        },
    ],
    accommodation: "Heritage guesthouse in Nizwa's old quarter",
    transportation: "Rental car, about 1.5 hours from Muscat",
    meals: "Halwa tasting and a traditional Omani lunch",
};

const DAY_WAHIBA: DayPlan = DayPlan {
    day: 3,
    title: "Night in the Dunes",
    location: "Wahiba Sands",
    duration: "Full day",
    highlights: &["Dune bashing", "Bedouin camp", "Desert stargazing"],
    activities: &[
        Activity {
            time: "Morning",
            name: "Wadi Bani Khalid",
            description: "Swim in the turquoise pools of one of Oman's most beautiful wadis.",
            tip: "Bring water shoes; the rocks are slippery.",
            image: IMG_WADI,
        },
        Activity {
            time: "Afternoon",
            name: "Dune drive",
            description: "Ride a 4x4 over the red dunes of the Sharqiyah Sands.",
            tip: "Lower tyre pressure at Al Wasil before heading into the sand.",
            image: IMG_DESERT,
        },
        Activity {
            time: "Evening",
            name: "Bedouin camp",
            description: "Watch the sunset from a dune crest, then dine under a sky full of stars.",
            tip: "Desert nights get cold from November to March. Pack a warm layer.",
            image: IMG_DESERT,
        },
    ],
    accommodation: "Desert camp in Wahiba Sands",
    transportation: "4x4 with driver from Al Wasil",
    meals: "Bedouin dinner with kahwa and dates",
};

const DAY_SUR_SHORT: DayPlan = DayPlan {
    day: 4,
    title: "Wadis and the Coast",
    location: "Sur",
    duration: "Full day",
    highlights: &["Wadi Shab", "Bimmah Sinkhole", "Dhow yard in Sur"],
    activities: &[
        Activity {
            time: "Morning",
            name: "Wadi Shab",
            description: "Hike and swim to the hidden waterfall cave at the head of the wadi.",
            tip: "Take a dry bag for your phone; the last stretch is a swim.",
            image: IMG_WADI,
        },
        Activity {
            time: "Afternoon",
            name: "Bimmah Sinkhole",
            description: "Cool off in the emerald water of a limestone sinkhole near the sea.",
            tip: "Small fish will nibble your feet. It is harmless.",
            image: IMG_SPRINGS,
        },
        Activity {
            time: "Evening",
            name: "Drive back to Muscat",
            description: "Follow the coastal highway back to the capital for your departure.",
            tip: "Allow 2.5 hours and keep fuel topped up on the coastal stretch.",
            image: IMG_MUSCAT,
        },
    ],
    accommodation: "Return to Muscat",
    transportation: "Rental car along the coastal highway",
    meals: "Fresh grilled fish in Sur",
};

static SHORT_DAYS: [DayPlan; 4] = [DAY_MUSCAT_ARRIVAL, DAY_NIZWA, DAY_WAHIBA, DAY_SUR_SHORT];

static MEDIUM_DAYS: [DayPlan; 5] = [
    DAY_MUSCAT_ARRIVAL,
    DAY_NIZWA,
    DayPlan {
        day: 3,
        title: "The Green Mountain",
        location: "Jebel Akhdar",
        duration: "Full day",
        highlights: &[
            "Saiq Plateau terraces",
            "Rose water distilleries",
            "Diana's Point",
        ],
        activities: &[
            Activity {
                time: "Morning",
                name: "Terrace villages walk",
                description: "Walk between Al Ayn, Al Aqr and Ash Shirayjah along the falaj channels.",
                tip: "Only 4x4 vehicles are allowed past the police checkpoint.",
                image: IMG_MOUNTAINS,
            },
            Activity {
                time: "Afternoon",
                name: "Rose water distillery",
                description: "See Damask roses distilled in clay pots the traditional way.",
                tip: "Roses bloom in April; outside the season the distilleries still sell rose water.",
                image: IMG_SPA,
            },
            Activity {
                time: "Evening",
                name: "Canyon sunset",
                description: "Watch the light fade over the canyon from Diana's Point.",
                tip: "At 2,000 m it is much cooler than the coast. Bring a jacket.",
                image: IMG_MOUNTAINS,
            },
        ],
        accommodation: "Mountain resort on the Saiq Plateau",
        transportation: "4x4 from Birkat Al Mouz",
        meals: "Pomegranates and mountain honey, dinner at the resort",
    },
    DayPlan {
        day: 4,
        ..DAY_WAHIBA
    },
    DayPlan {
        day: 5,
        ..DAY_SUR_SHORT
    },
];

static FULL_DAYS: [DayPlan; 7] = [
    DAY_MUSCAT_ARRIVAL,
    DayPlan {
        day: 2,
        title: "Muscat Old and New",
        location: "Muscat",
        duration: "Full day",
        highlights: &[
            "Al Alam Palace",
            "Bait Al Zubair Museum",
            "Dolphin watching",
        ],
        activities: &[
            Activity {
                time: "Morning",
                name: "Dolphin watching cruise",
                description: "Head out from Marina Bandar Al Rowdha to find spinner dolphins.",
                tip: "Morning seas are calmest; take motion sickness tablets if you need them.",
                image: IMG_MUSCAT,
            },
            Activity {
                time: "Afternoon",
                name: "Old Muscat",
                description: "See Al Alam Palace flanked by the Portuguese forts of Jalali and Mirani.",
                tip: "Bait Al Zubair Museum next door explains the khanjar and traditional dress.",
                image: IMG_MUSCAT,
            },
            Activity {
                time: "Evening",
                name: "Omani dinner",
                description: "Try a set menu of Omani dishes on floor cushions.",
                tip: "Eat with your right hand if dining traditionally.",
                image: IMG_CUISINE,
            },
        ],
        accommodation: "Boutique hotel in Mutrah or Qurum",
        transportation: "Taxi or rental car",
        meals: "Seafood lunch at the marina, Omani dinner",
    },
    DayPlan {
        day: 3,
        title: "Nizwa and Bahla",
        location: "Nizwa",
        duration: "Full day",
        highlights: &["Nizwa Fort", "Bahla Fort", "Falaj Daris"],
        activities: &[
            Activity {
                time: "Morning",
                name: "Nizwa Fort and Souq",
                description: "Start at the fort's drum tower, then browse the pottery and halwa stalls.",
                tip: "Arrive at opening time; the tower gets hot by late morning.",
                image: IMG_NIZWA,
            },
            Activity {
                time: "Afternoon",
                name: "Bahla Fort",
                description: "Explore the UNESCO-listed mud-brick fortress and its 13 km oasis wall.",
                tip: "Bahla is also known for its pottery workshops near the fort.",
                image: IMG_BAHLA,
            },
            Activity {
                time: "Evening",
                name: "Falaj Daris",
                description: "Follow the oldest working falaj in the area as it waters the date gardens.",
                tip: "Late afternoon light is best for photographs.",
                image: IMG_AFLAJ,
            },
        ],
        accommodation: "Heritage guesthouse in Nizwa's old quarter",
        transportation: "Rental car, about 1.5 hours from Muscat",
        meals: "Halwa tasting and a traditional Omani lunch",
    },
    DayPlan {
        day: 4,
        title: "The Green Mountain",
        location: "Jebel Akhdar",
        duration: "Full day",
        highlights: &["Saiq Plateau", "Wadi Bani Habib", "Diana's Point"],
        activities: &[
            Activity {
                time: "Morning",
                name: "Wadi Bani Habib",
                description: "Wander through an abandoned mud village among walnut trees.",
                tip: "The path down is steep. Wear proper shoes.",
                image: IMG_MOUNTAINS,
            },
            Activity {
                time: "Afternoon",
                name: "Terrace villages walk",
                description: "Walk between terraced villages along the falaj channels.",
                tip: "Only 4x4 vehicles are allowed past the police checkpoint.",
                image: IMG_MOUNTAINS,
            },
            Activity {
                time: "Evening",
                name: "Canyon sunset",
                description: "Watch the light fade over the canyon from Diana's Point.",
                tip: "At 2,000 m it is much cooler than the coast. Bring a jacket.",
                image: IMG_MOUNTAINS,
            },
        ],
        accommodation: "Mountain resort on the Saiq Plateau",
        transportation: "4x4 from Birkat Al Mouz",
        meals: "Mountain honey and pomegranates, dinner at the resort",
    },
    DayPlan {
        day: 5,
        ..DAY_WAHIBA
    },
    DayPlan {
        day: 6,
        title: "Sur and the Turtle Beach",
        location: "Ras al Jinz",
        duration: "Full day",
        highlights: &["Dhow yard in Sur", "Ayjah lighthouse", "Green turtles nesting"],
        activities: &[
            Activity {
                time: "Morning",
                name: "Sur dhow yard",
                description: "Watch shipwrights build wooden dhows the way they have for centuries.",
                tip: "Work stops at midday; go early.",
                image: IMG_SOUQ,
            },
            Activity {
                time: "Afternoon",
                name: "Ayjah village",
                description: "Cross the bridge to the whitewashed houses and lighthouse of Ayjah.",
                tip: "The viewpoint above the lighthouse gives the best view of the lagoon.",
                image: IMG_MUSCAT,
            },
            Activity {
                time: "Evening",
                name: "Turtle watching",
                description: "Join the ranger-led night walk to see green turtles nesting and hatching.",
                tip: "Book ahead. Flash photography is not allowed on the beach.",
                image: IMG_DESERT,
            },
        ],
        accommodation: "Turtle reserve eco-lodge at Ras al Jinz",
        transportation: "Rental car from Wahiba Sands, about 2.5 hours",
        meals: "Fresh grilled fish in Sur",
    },
    DayPlan {
        day: 7,
        title: "Wadis on the Way Home",
        location: "Sur",
        duration: "Full day",
        highlights: &["Wadi Shab", "Bimmah Sinkhole", "Coastal highway"],
        activities: &[
            Activity {
                time: "Morning",
                name: "Wadi Shab",
                description: "Hike and swim to the hidden waterfall cave at the head of the wadi.",
                tip: "Take a dry bag for your phone; the last stretch is a swim.",
                image: IMG_WADI,
            },
            Activity {
                time: "Afternoon",
                name: "Bimmah Sinkhole",
                description: "Cool off in the emerald water of a limestone sinkhole near the sea.",
                tip: "Small fish will nibble your feet. It is harmless.",
                image: IMG_SPRINGS,
            },
            Activity {
                time: "Evening",
                name: "Farewell in Muscat",
                description: "A last walk on the Qurum beach before departure.",
                tip: "Keep an hour spare for last-minute frankincense shopping.",
                image: IMG_MUSCAT,
            },
        ],
        accommodation: "Hotel in Muscat",
        transportation: "Rental car along the coastal highway",
        meals: "Karak tea and shawarma on the beach road",
    },
];

static SALALAH_DAY: DayPlan = DayPlan {
    day: 8,
    title: "Land of Frankincense",
    location: "Salalah",
    duration: "Full day",
    highlights: &[
        "Al Baleed Archaeological Park",
        "Wadi Dawkah frankincense trees",
        "Al Haffa Souq",
    ],
    activities: &[
        Activity {
            time: "Morning",
            name: "Al Baleed Archaeological Park",
            description: "Walk the ruins of the old frankincense port and visit the Museum of the Frankincense Land.",
            tip: "The museum's maritime hall is air-conditioned; save it for the hottest hour.",
            image: IMG_BALEED,
        },
        Activity {
            time: "Afternoon",
            name: "Wadi Dawkah",
            description: "See the Boswellia sacra trees that made Dhofar rich.",
            tip: "Do not cut the bark. Resin is sold at the souq.",
            image: IMG_FRANKINCENSE,
        },
        Activity {
            time: "Evening",
            name: "Al Haffa Souq",
            description: "Buy frankincense, burners and Dhofari perfumes.",
            tip: "Higher grades of resin are paler and more translucent.",
            image: IMG_SOUQ,
        },
    ],
    accommodation: "Beach resort in Salalah",
    transportation: "Domestic flight from Muscat, then rental car",
    meals: "Coconut and papaya from the roadside stalls, Dhofari dinner",
};

static MUSANDAM_DAY: DayPlan = DayPlan {
    day: 9,
    title: "Fjords of Arabia",
    location: "Musandam",
    duration: "Full day",
    highlights: &["Dhow cruise in Khor Ash Sham", "Telegraph Island", "Snorkelling"],
    activities: &[
        Activity {
            time: "Morning",
            name: "Dhow cruise",
            description: "Sail the fjords of Khor Ash Sham past fishing villages reachable only by boat.",
            tip: "Full-day cruises include lunch on board.",
            image: IMG_MUSCAT,
        },
        Activity {
            time: "Afternoon",
            name: "Telegraph Island snorkel",
            description: "Snorkel the clear water around the old British telegraph station.",
            tip: "Dolphins often follow the dhows. Keep a camera handy.",
            image: IMG_SPRINGS,
        },
        Activity {
            time: "Evening",
            name: "Khasab Castle",
            description: "End the journey at the Portuguese-built castle overlooking Khasab harbour.",
            tip: "The castle museum closes early; check the hours the day before.",
            image: IMG_BAHLA,
        },
    ],
    accommodation: "Hotel in Khasab",
    transportation: "Domestic flight or ferry to Khasab",
    meals: "Seafood on the dhow, dinner in Khasab",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_contiguous(plan: &ItineraryPlan) {
        for (i, day) in plan.days.iter().enumerate() {
            assert_eq!(day.day as usize, i + 1, "{} day {}", plan.bucket.key(), i + 1);
        }
    }

    #[test]
    fn labels_select_expected_day_counts() {
        let cases = [
            ("3-4 Days", 4),
            ("5-6 Days", 5),
            ("7-8 Days", 7),
            ("10-12 Days", 8),
            ("14+ Days", 9),
        ];
        for (label, days) in cases {
            let plan = select_itinerary(Some(label));
            assert_eq!(plan.len(), days, "{label}");
            assert_contiguous(&plan);
        }
    }

    #[test]
    fn unmatched_labels_fall_back_to_seven_days() {
        for label in [Some(""), Some("two weeks"), Some("1-2 Days"), None] {
            let plan = select_itinerary(label);
            assert_eq!(plan.bucket, DurationBucket::Full);
            assert_eq!(plan.len(), 7);
        }
    }

    #[test]
    fn first_matching_marker_wins() {
        // Contains both "3-4" and "14+"; the shorter bucket is checked first.
        assert_eq!(DurationBucket::from_label("3-4 or 14+"), Some(DurationBucket::Short));
    }

    #[test]
    fn extended_plans_build_on_the_full_plan() {
        let full = select_plan(DurationBucket::Full);
        let extended = select_plan(DurationBucket::Extended);
        let comprehensive = select_plan(DurationBucket::Comprehensive);
        assert_eq!(&extended.days[..7], &full.days[..]);
        assert_eq!(&comprehensive.days[..8], &extended.days[..]);
        assert_eq!(extended.days[7].location, "Salalah");
        assert_eq!(comprehensive.days[8].location, "Musandam");
    }

    #[test]
    fn every_day_is_fully_authored() {
        for bucket in DurationBucket::ALL {
            for day in select_plan(bucket).days {
                assert!(!day.highlights.is_empty());
                assert!(!day.activities.is_empty());
                assert!(!day.accommodation.is_empty());
                assert!(!day.transportation.is_empty());
                assert!(!day.meals.is_empty());
            }
        }
    }

    #[test]
    fn day_lookup_respects_range() {
        let plan = select_plan(DurationBucket::Short);
        assert!(plan.day(0).is_none());
        assert_eq!(plan.day(1).map(|d| d.location), Some("Muscat"));
        assert!(plan.day(4).is_some());
        assert!(plan.day(5).is_none());
    }

    #[test]
    fn regions_grow_with_duration() {
        let tiers: Vec<_> = DurationBucket::ALL.iter().map(|b| regions_for(*b)).collect();
        for pair in tiers.windows(2) {
            let (smaller, larger) = (pair[0], pair[1]);
            assert!(larger.len() > smaller.len());
            assert!(smaller.iter().all(|r| larger.contains(r)));
        }
    }

    #[test]
    fn regions_and_budget_use_the_same_fallback() {
        assert_eq!(regions_covered(None), regions_for(DurationBucket::Full));
        assert_eq!(budget_estimate(Some("??")), budget_for(DurationBucket::Full));
        assert_eq!(regions_covered(Some("14+ Days")).len(), 8);
    }

    #[test]
    fn bucket_accepts_key_or_label() {
        assert_eq!(
            DurationBucket::try_from("extended".to_string()),
            Ok(DurationBucket::Extended)
        );
        assert_eq!(
            DurationBucket::try_from("10-12 Days".to_string()),
            Ok(DurationBucket::Extended)
        );
        assert!(DurationBucket::try_from("forever".to_string()).is_err());
    }

    #[test]
    fn bucket_serializes_as_stable_key() {
        let json = serde_json::to_string(&DurationBucket::Comprehensive).unwrap();
        assert_eq!(json, "\"comprehensive\"");
    }
}
