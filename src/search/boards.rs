//! Direct job board search links
//!
//! X-raying through Google is the primary channel; these links hit each
//! board's native search interface instead, with the same C2C intent baked
//! into the keywords and the platform's own filter parameters.

use serde::{Deserialize, Serialize};

use crate::search::encode::encode_pairs;
use crate::search::query::SearchPlatform;

/// A direct link to a job board's own search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobBoardLink {
    pub platform: SearchPlatform,
    pub url: String,
    pub description: String,
}

pub fn dice(title: &str, location: &str) -> JobBoardLink {
    let q = format!("{title} c2c");
    let qs = encode_pairs(&[
        ("q", &q),
        ("location", location),
        ("radius", "50"),
        ("filters.employmentType", "CONTRACT"),
    ]);
    JobBoardLink {
        platform: SearchPlatform::Dice,
        url: format!("https://www.dice.com/jobs?{qs}"),
        description: format!("Dice: {title} C2C near {location}"),
    }
}

pub fn indeed(title: &str, location: &str) -> JobBoardLink {
    let q = format!("{title} c2c corp to corp");
    let qs = encode_pairs(&[("q", &q), ("l", location), ("radius", "50"), ("jt", "contract")]);
    JobBoardLink {
        platform: SearchPlatform::Indeed,
        url: format!("https://www.indeed.com/jobs?{qs}"),
        description: format!("Indeed: {title} C2C near {location}"),
    }
}

pub fn linkedin(title: &str, location: &str) -> JobBoardLink {
    let keywords = format!("{title} c2c corp to corp");
    let location = or_default(location);
    // f_JT=C narrows to contract engagements.
    let qs = encode_pairs(&[("keywords", &keywords), ("location", location), ("f_JT", "C")]);
    JobBoardLink {
        platform: SearchPlatform::Linkedin,
        url: format!("https://www.linkedin.com/jobs/search/?{qs}"),
        description: format!("LinkedIn: {title} C2C"),
    }
}

pub fn ziprecruiter(title: &str, location: &str) -> JobBoardLink {
    let search = format!("{title} c2c corp to corp");
    let location = or_default(location);
    let qs = encode_pairs(&[("search", &search), ("location", location)]);
    JobBoardLink {
        platform: SearchPlatform::Ziprecruiter,
        url: format!("https://www.ziprecruiter.com/jobs/search?{qs}"),
        description: format!("ZipRecruiter: {title} C2C"),
    }
}

pub fn monster(title: &str, location: &str) -> JobBoardLink {
    let q = format!("{title} c2c corp to corp");
    let location = or_default(location);
    let qs = encode_pairs(&[("q", &q), ("where", location)]);
    JobBoardLink {
        platform: SearchPlatform::Monster,
        url: format!("https://www.monster.com/jobs/search/?{qs}"),
        description: format!("Monster: {title} C2C"),
    }
}

pub fn careerbuilder(title: &str, location: &str) -> JobBoardLink {
    let keywords = format!("{title} c2c corp to corp");
    let qs = encode_pairs(&[("keywords", &keywords), ("location", location)]);
    JobBoardLink {
        platform: SearchPlatform::Careerbuilder,
        url: format!("https://www.careerbuilder.com/jobs?{qs}"),
        description: format!("CareerBuilder: {title} C2C"),
    }
}

pub fn glassdoor(title: &str, location: &str) -> JobBoardLink {
    let keyword = format!("{title} c2c corp to corp");
    let location = or_default(location);
    let qs = encode_pairs(&[("sc.keyword", &keyword), ("locT", "N"), ("locKeyword", location)]);
    JobBoardLink {
        platform: SearchPlatform::Glassdoor,
        url: format!("https://www.glassdoor.com/Job/jobs.htm?{qs}"),
        description: format!("Glassdoor: {title} C2C"),
    }
}

pub fn techfetch(title: &str) -> JobBoardLink {
    let qs = encode_pairs(&[("q", title), ("jtype", "C2C,Contract")]);
    JobBoardLink {
        platform: SearchPlatform::Techfetch,
        url: format!("https://www.techfetch.com/job/search?{qs}"),
        description: format!("TechFetch: {title} C2C/contract"),
    }
}

/// Search links for all supported boards, in declaration order.
pub fn all_boards(title: &str, location: &str) -> Vec<JobBoardLink> {
    vec![
        dice(title, location),
        indeed(title, location),
        linkedin(title, location),
        ziprecruiter(title, location),
        monster(title, location),
        careerbuilder(title, location),
        glassdoor(title, location),
        techfetch(title),
    ]
}

fn or_default(location: &str) -> &str {
    if location.is_empty() {
        "United States"
    } else {
        location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_link_pins_contract_filter() {
        let link = dice("Java Developer", "Dallas, TX");
        assert!(link.url.starts_with("https://www.dice.com/jobs?"));
        assert!(link.url.contains("q=Java+Developer+c2c"));
        assert!(link.url.contains("filters.employmentType=CONTRACT"));
        assert!(link.url.contains("location=Dallas%2C+TX"));
    }

    #[test]
    fn linkedin_defaults_location_to_united_states() {
        let link = linkedin("Data Engineer", "");
        assert!(link.url.contains("location=United+States"));
        assert!(link.url.contains("f_JT=C"));
    }

    #[test]
    fn careerbuilder_keeps_empty_location_empty() {
        let link = careerbuilder("Data Engineer", "");
        assert!(link.url.ends_with("location="));
    }

    #[test]
    fn techfetch_encodes_jtype_comma() {
        let link = techfetch("QA Engineer");
        assert!(link.url.contains("jtype=C2C%2CContract"));
    }

    #[test]
    fn all_boards_covers_eight_platforms() {
        let links = all_boards("DevOps Engineer", "Seattle, WA");
        assert_eq!(links.len(), 8);
        assert_eq!(links[0].platform, SearchPlatform::Dice);
        assert_eq!(links[6].platform, SearchPlatform::Glassdoor);
        for link in &links {
            assert!(link.url.starts_with("https://"));
            assert!(link.url.to_lowercase().contains("c2c") || !link.description.is_empty());
        }
    }

    #[test]
    fn keywords_never_seed_w2() {
        for link in all_boards("Java Developer", "") {
            assert!(!link.url.to_lowercase().contains("w2"));
        }
    }
}
