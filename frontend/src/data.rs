//! Static page content bundled with the app.

use serde::{Deserialize, Serialize};

use crate::listing::{OpinionRecord, ALL};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub header_badge: Option<&'static str>,
    pub header_text: Option<&'static str>,
}

impl FeatureItem {
    pub fn badge(&self) -> &'static str {
        self.header_badge.unwrap_or("Email inbox")
    }

    pub fn header(&self) -> &'static str {
        self.header_text.unwrap_or("Email notifications for all projects")
    }
}

pub const DEFAULT_FEATURE_IMAGE: &str = "/images/benefit-01.svg";

pub const FEATURES: [FeatureItem; 4] = [
    FeatureItem {
        id: "simple",
        title: "Make Complex Simple",
        description: "Transform complex project data into clear, actionable insights that drive better decisions.",
        image: "/images/benefit-01.svg",
        header_badge: Some("Easy Search"),
        header_text: Some("Streamline searches with filters"),
    },
    FeatureItem {
        id: "confidence",
        title: "Act With Confidence",
        description: "Every project is verified by local researchers, giving you trusted, decision-ready intelligence you can rely on.",
        image: "/images/benefit-02.svg",
        header_badge: Some("Verified"),
        header_text: Some("Capable researchers with years of experience"),
    },
    FeatureItem {
        id: "win",
        title: "Win Projects",
        description: "Gain early access to project opportunities across Africa, so you can position first, engage early, and win deals.",
        image: "/images/benefit-03.svg",
        header_badge: Some("Email Inbox"),
        header_text: Some("Email notifications for all projects"),
    },
    FeatureItem {
        id: "ahead",
        title: "Stay Ahead",
        description: "Monitor market trends and emerging opportunities before your competitors even know they exist.",
        image: "/images/benefit-04.svg",
        header_badge: Some("Updates"),
        header_text: Some("Live updates on every followed project"),
    },
];

fn opinion(id: i32, name: &str, title: &str, opinion: &str, image: &str) -> OpinionRecord {
    OpinionRecord {
        id,
        name: name.to_string(),
        title: title.to_string(),
        opinion: opinion.to_string(),
        image: image.to_string(),
    }
}

/// The three opinions highlighted on the home page.
pub fn featured_opinions() -> Vec<OpinionRecord> {
    vec![
        opinion(
            1,
            "Ngozi Adeyemi",
            "Financing the Next Decade of African Infrastructure",
            "<p>Blended finance is finally moving from pilot to pipeline. Projects that bring <strong>local lenders</strong> in early are closing faster.</p>",
            "https://images.unsplash.com/photo-1531123897727-8f129e1688ce?q=80&w=400&h=400&fit=crop",
        ),
        opinion(
            2,
            "Samuel Okoro",
            "Why Verified Project Data Changes Bidding",
            "Contractors who track tenders from the feasibility stage win more often than those who wait for the public notice.",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=400&h=400&fit=crop",
        ),
        opinion(
            3,
            "Amina Yusuf",
            "Energy Transition and the Construction Supply Chain",
            "<p>Solar and grid projects are reshaping demand for steel, cable and skilled labour across the continent.</p>",
            "https://images.unsplash.com/photo-1573497019940-1c28c88b4f3e?q=80&w=400&h=400&fit=crop",
        ),
    ]
}

/// Full list shown on the expert opinions page, newest first.
pub fn expert_opinions() -> Vec<OpinionRecord> {
    let mut opinions = featured_opinions();
    opinions.extend([
        opinion(
            4,
            "Vusipenga Thembekwayo",
            "African Construction Market Reaches Record $180 Billion in 2025 Reports",
            "Lagos-Calabar Coastal Railway is a 1,400-kilometre standard gauge railway line designed to connect Nigeria's major coastal cities, states and villages.",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=400&h=400&fit=crop",
        ),
        opinion(
            5,
            "Kwame Mensah",
            "Sustainable Infrastructure Development in West Africa",
            "The future of African construction lies in sustainable practices that balance economic growth with environmental responsibility and social equity.",
            "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?q=80&w=400&h=400&fit=crop",
        ),
        opinion(
            6,
            "Fatima Hassan",
            "Digital Transformation in African Construction",
            "Embracing digital technologies and innovative construction methods will be crucial for Africa's infrastructure development in the coming decades.",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=400&h=400&fit=crop",
        ),
        opinion(
            7,
            "John Mwangi",
            "Public-Private Partnerships in Infrastructure",
            "Effective PPP models are essential for bridging Africa's infrastructure gap and attracting the necessary investment for large-scale projects.",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=400&h=400&fit=crop",
        ),
        opinion(
            8,
            "Aisha Diallo",
            "Urban Planning and Smart Cities in Africa",
            "As African cities continue to grow, smart urban planning and sustainable city development will become increasingly important for quality of life.",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?q=80&w=400&h=400&fit=crop",
        ),
    ]);
    opinions
}

pub fn find_opinion(id: i32) -> Option<OpinionRecord> {
    expert_opinions().into_iter().find(|opinion| opinion.id == id)
}

pub const REGIONS: [&str; 6] = [ALL, "West Africa", "East Africa", "South Africa", "Central Africa", "North Africa"];
pub const FILTER_COUNTRIES: [&str; 6] = [ALL, "Nigeria", "Kenya", "South Africa", "Egypt", "Ghana"];
pub const SECTORS: [&str; 6] = [ALL, "Infrastructure", "Energy", "Transportation", "Housing", "Technology"];

/// (ISO code, display name) for the lead forms.
pub const COUNTRIES: &[(&str, &str)] = &[
    ("NG", "Nigeria"),
    ("ZA", "South Africa"),
    ("KE", "Kenya"),
    ("GH", "Ghana"),
    ("EG", "Egypt"),
    ("ET", "Ethiopia"),
    ("TZ", "Tanzania"),
    ("UG", "Uganda"),
    ("AO", "Angola"),
    ("DZ", "Algeria"),
    ("SD", "Sudan"),
    ("MA", "Morocco"),
    ("MZ", "Mozambique"),
    ("MG", "Madagascar"),
    ("CM", "Cameroon"),
    ("CI", "Côte d'Ivoire"),
    ("NE", "Niger"),
    ("BF", "Burkina Faso"),
    ("ML", "Mali"),
    ("MW", "Malawi"),
    ("ZM", "Zambia"),
    ("SN", "Senegal"),
    ("TD", "Chad"),
    ("SO", "Somalia"),
    ("ZW", "Zimbabwe"),
    ("GN", "Guinea"),
    ("RW", "Rwanda"),
    ("BJ", "Benin"),
    ("TN", "Tunisia"),
    ("BI", "Burundi"),
];

pub const PHONE_CODES: &[(&str, &str)] = &[
    ("US", "US +1"),
    ("GB", "GB +44"),
    ("NG", "NG +234"),
    ("ZA", "ZA +27"),
    ("KE", "KE +254"),
    ("GH", "GH +233"),
    ("EG", "EG +20"),
    ("ET", "ET +251"),
    ("TZ", "TZ +255"),
    ("UG", "UG +256"),
];

pub struct BrandLogo {
    pub name: &'static str,
    pub logo: &'static str,
}

pub static BRAND_LOGOS: [BrandLogo; 6] = [
    BrandLogo { name: "Arab Contractors", logo: "/logos/Client 01_Arab Contractors.png" },
    BrandLogo { name: "Aksa Energy Company Ghana Ltd", logo: "/logos/Client 02_Aksa Energy Company Ghana Ltd.png" },
    BrandLogo { name: "House Matic", logo: "/logos/Client 03_House Matic.png" },
    BrandLogo { name: "EquipmentHub", logo: "/logos/Client 04_EquipmentHub.png" },
    BrandLogo { name: "Kuulbreeze", logo: "/logos/Client 05_Kuulbreeze.png" },
    BrandLogo { name: "Damian James", logo: "/logos/Client 06_Damian James.png" },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: i32,
    pub image: String,
    pub location: String,
    pub title: String,
    pub description: String,
}

const PROJECT_IMAGE: &str = "https://images.unsplash.com/photo-1762755126280-6d8a4f9d1115?auto=format&fit=crop&q=80&w=2070";

/// Shown while the API is unreachable, and as the news strip.
pub fn trending_projects() -> Vec<ProjectSummary> {
    [
        (1, "West Africa", "Egypt seeks consultants for an administration building", "The Egyptian Environmental Affairs Agency invites consulting firms to indicate interest."),
        (2, "East Africa", "Kenya Infrastructure Development Project", "Major infrastructure development initiative across multiple regions in Kenya including roads, bridges, and public facilities."),
        (3, "South Africa", "Cape Town Smart City Initiative", "Comprehensive smart city development project focusing on sustainable urban planning and digital infrastructure."),
        (4, "Central Africa", "Renewable Energy Grid Expansion", "Large-scale renewable energy infrastructure project to expand the national grid across multiple provinces."),
        (5, "North Africa", "Port Modernization Program", "Comprehensive modernization of major port facilities including container terminals and logistics infrastructure."),
    ]
    .into_iter()
    .map(|(id, location, title, description)| ProjectSummary {
        id,
        image: PROJECT_IMAGE.to_string(),
        location: location.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

pub static TEAM_MEMBERS: [TeamMember; 4] = [
    TeamMember { name: "Olusegun Bakare", role: "Chair, Industry Advisory Board", image: "/images/team/olusegun-bakare.jpg" },
    TeamMember { name: "Grace Wanjiru", role: "Infrastructure Finance", image: "/images/team/grace-wanjiru.jpg" },
    TeamMember { name: "Youssef El-Sayed", role: "Energy and Utilities", image: "/images/team/youssef-el-sayed.jpg" },
    TeamMember { name: "Thandiwe Nkosi", role: "Urban Development", image: "/images/team/thandiwe-nkosi.jpg" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn opinion_ids_are_unique_and_start_with_featured() {
        let all = expert_opinions();
        let ids: HashSet<i32> = all.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), all.len());
        assert_eq!(&all[..3], &featured_opinions()[..]);
    }

    #[test]
    fn find_opinion_by_id() {
        assert_eq!(find_opinion(5).map(|o| o.name), Some("Kwame Mensah".to_string()));
        assert!(find_opinion(99).is_none());
    }

    #[test]
    fn filter_lists_start_with_all() {
        for list in [REGIONS, FILTER_COUNTRIES, SECTORS] {
            assert_eq!(list[0], ALL);
        }
    }

    #[test]
    fn every_feature_has_header_copy() {
        for feature in FEATURES {
            assert!(!feature.badge().is_empty());
            assert!(!feature.header().is_empty());
            assert!(feature.image.starts_with("/images/"));
        }
    }
}
