use serde::{Deserialize, Serialize};

/// A financial advisor that can be assigned call bookings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub title: String,
    pub bio: String,
}

/// The advisors taking call bookings, in assignment order
pub fn default_roster() -> Vec<Advisor> {
    vec![
        Advisor {
            id: "david".into(),
            name: "David Fei".into(),
            email: "david.fei@planwellfp.com".into(),
            title: "CFP®, ChFEBC℠, AIF®".into(),
            bio: "David specializes in federal retirement planning and has helped hundreds of FERS employees optimize their benefits.".into(),
        },
        Advisor {
            id: "brennan".into(),
            name: "Brennan Rhule".into(),
            email: "brennan.rhule@planwellfp.com".into(),
            title: "CFP®, ChFEBC℠, AIF®".into(),
            bio: "Brennan focuses on comprehensive financial planning for federal employees, with expertise in TSP and pension optimization.".into(),
        },
    ]
}
