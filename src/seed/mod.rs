//! Seed data provider.
//!
//! Immutable baseline collections bundled with the console. Each accessor
//! is a pure function returning a fixed in-memory array with stable ids;
//! the overlay engine layers user edits on top, and clearing a namespace
//! resets its listing back to these records.

use crate::models::{
    Announcement, AnnouncementStatus, Audience, Content, ContentStatus, ContentType, Contract,
    ContractStatus, ContractType, DeliveryLog, DeliveryStatus, Devotee, DevoteeStatus, Freelancer,
    FreelancerStatus, RecipientType, VipDevotee, VipLevel,
};

pub fn devotees() -> Vec<Devotee> {
    vec![
        Devotee {
            id: "dev-001".to_string(),
            devotee_id: "DEV-0001".to_string(),
            name: "Ananya Iyer".to_string(),
            email: "ananya.iyer@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "12 Temple Road, Madurai".to_string(),
            status: DevoteeStatus::Active,
            registration_date: "2023-04-14T08:00:00+00:00".to_string(),
            visit_count: Some(27),
            last_visit: Some("2024-11-12T06:30:00+00:00".to_string()),
            is_vip: Some(true),
        },
        Devotee {
            id: "dev-002".to_string(),
            devotee_id: "DEV-0002".to_string(),
            name: "Rohan Deshpande".to_string(),
            email: "rohan.d@example.com".to_string(),
            phone: "+91 91234 56789".to_string(),
            address: "45 Ghat Lane, Varanasi".to_string(),
            status: DevoteeStatus::Active,
            registration_date: "2023-08-02T09:15:00+00:00".to_string(),
            visit_count: Some(9),
            last_visit: None,
            is_vip: None,
        },
        Devotee {
            id: "dev-003".to_string(),
            devotee_id: "DEV-0003".to_string(),
            name: "Meera Krishnan".to_string(),
            email: "meera.k@example.com".to_string(),
            phone: "+91 99887 66554".to_string(),
            address: "3 Car Street, Udupi".to_string(),
            status: DevoteeStatus::Inactive,
            registration_date: "2022-12-20T11:00:00+00:00".to_string(),
            visit_count: None,
            last_visit: None,
            is_vip: None,
        },
    ]
}

pub fn vip_devotees() -> Vec<VipDevotee> {
    vec![VipDevotee {
        // Mirrors dev-001 from the devotee seed.
        devotee: Devotee {
            id: "dev-001".to_string(),
            devotee_id: "DEV-0001".to_string(),
            name: "Ananya Iyer".to_string(),
            email: "ananya.iyer@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "12 Temple Road, Madurai".to_string(),
            status: DevoteeStatus::Active,
            registration_date: "2023-04-14T08:00:00+00:00".to_string(),
            visit_count: Some(27),
            last_visit: Some("2024-11-12T06:30:00+00:00".to_string()),
            is_vip: Some(true),
        },
        vip_level: VipLevel::Gold,
        vip_services: vec![
            "special-darshan".to_string(),
            "festival-seating".to_string(),
        ],
        vip_since: "2024-01-01T00:00:00+00:00".to_string(),
        special_notes: Some("Sponsors the annual chariot festival.".to_string()),
    }]
}

pub fn freelancers() -> Vec<Freelancer> {
    vec![
        Freelancer {
            id: "frl-001".to_string(),
            freelancer_id: "FRL-0001".to_string(),
            name: "Suresh Acharya".to_string(),
            email: "suresh.acharya@example.com".to_string(),
            phone: "+91 90000 11223".to_string(),
            specialization: "Vedic chanting instructor".to_string(),
            status: FreelancerStatus::OnContract,
            join_date: "2023-06-01T10:00:00+00:00".to_string(),
            address: Some("8 Agraharam Street, Kumbakonam".to_string()),
            hourly_rate: Some(800.0),
            total_projects: Some(14),
        },
        Freelancer {
            id: "frl-002".to_string(),
            freelancer_id: "FRL-0002".to_string(),
            name: "Lakshmi Nair".to_string(),
            email: "lakshmi.nair@example.com".to_string(),
            phone: "+91 90000 44556".to_string(),
            specialization: "Kolam artist".to_string(),
            status: FreelancerStatus::Active,
            join_date: "2024-02-18T10:00:00+00:00".to_string(),
            address: None,
            hourly_rate: Some(500.0),
            total_projects: Some(3),
        },
    ]
}

pub fn contracts() -> Vec<Contract> {
    vec![Contract {
        id: "con-001".to_string(),
        freelancer_id: "frl-001".to_string(),
        freelancer_name: "Suresh Acharya".to_string(),
        contract_type: ContractType::Retainer,
        start_date: "2024-04-01T00:00:00+00:00".to_string(),
        end_date: Some("2025-03-31T00:00:00+00:00".to_string()),
        status: ContractStatus::Active,
        rate: 25000.0,
        total_hours: None,
        description: "Weekly chanting classes and festival support.".to_string(),
    }]
}

pub fn content() -> Vec<Content> {
    vec![
        Content {
            id: "cnt-001".to_string(),
            title: "Kartik Purnima Schedule".to_string(),
            content: "<p>Evening aarti begins at 7pm on the main ghat.</p>".to_string(),
            content_type: ContentType::Event,
            status: ContentStatus::Published,
            language: "en".to_string(),
            author_id: "usr-001".to_string(),
            author_name: "Priya Sharma".to_string(),
            version: 3,
            created_at: "2024-10-20T10:00:00+00:00".to_string(),
            updated_at: "2024-11-01T15:30:00+00:00".to_string(),
            published_at: Some("2024-11-01T16:00:00+00:00".to_string()),
            approved_by: Some("usr-002".to_string()),
            approved_at: Some("2024-11-01T15:45:00+00:00".to_string()),
        },
        Content {
            id: "cnt-002".to_string(),
            title: "Morning Abhishekam Guide".to_string(),
            content: "<p>Steps and offerings for the morning abhishekam.</p>".to_string(),
            content_type: ContentType::RitualGuide,
            status: ContentStatus::Draft,
            language: "ta".to_string(),
            author_id: "usr-003".to_string(),
            author_name: "Karthik Raman".to_string(),
            version: 1,
            created_at: "2024-11-10T08:00:00+00:00".to_string(),
            updated_at: "2024-11-10T08:00:00+00:00".to_string(),
            published_at: None,
            approved_by: None,
            approved_at: None,
        },
    ]
}

pub fn announcements() -> Vec<Announcement> {
    vec![Announcement {
        id: "ann-001".to_string(),
        title: "Temple closed for renovation".to_string(),
        message: "The east mandapam is closed on Nov 20 for painting work.".to_string(),
        audience: Audience::All,
        status: AnnouncementStatus::Sent,
        scheduled_at: Some("2024-11-15T05:00:00+00:00".to_string()),
        sent_at: Some("2024-11-15T05:00:04+00:00".to_string()),
        created_at: "2024-11-14T12:00:00+00:00".to_string(),
        created_by: "usr-001".to_string(),
        created_by_name: "Priya Sharma".to_string(),
    }]
}

pub fn delivery_logs() -> Vec<DeliveryLog> {
    vec![
        DeliveryLog {
            id: "dlv-001".to_string(),
            announcement_id: "ann-001".to_string(),
            recipient_id: "dev-001".to_string(),
            recipient_type: RecipientType::Devotee,
            status: DeliveryStatus::Delivered,
            delivered_at: Some("2024-11-15T05:00:09+00:00".to_string()),
            failed_reason: None,
            timestamp: "2024-11-15T05:00:05+00:00".to_string(),
        },
        DeliveryLog {
            id: "dlv-002".to_string(),
            announcement_id: "ann-001".to_string(),
            recipient_id: "dev-003".to_string(),
            recipient_type: RecipientType::Devotee,
            status: DeliveryStatus::Failed,
            delivered_at: None,
            failed_reason: Some("invalid phone number".to_string()),
            timestamp: "2024-11-15T05:00:05+00:00".to_string(),
        },
    ]
}
