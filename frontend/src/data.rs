use crate::models::{Doctor, Feature, QuickStats, Specialty, StatSpec};

pub const CITIES: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Hyderabad",
    "Chennai",
    "Pune",
    "Kolkata",
];

pub const SPECIALTIES: &[Specialty] = &[
    Specialty { key: "cardiology", label: "Cardiology", icon: "❤️" },
    Specialty { key: "dermatology", label: "Dermatology", icon: "🧴" },
    Specialty { key: "pediatrics", label: "Pediatrics", icon: "🧸" },
    Specialty { key: "orthopedics", label: "Orthopedics", icon: "🦴" },
    Specialty { key: "neurology", label: "Neurology", icon: "🧠" },
    Specialty { key: "dentistry", label: "Dentistry", icon: "🦷" },
];

pub const STATS: &[StatSpec] = &[
    StatSpec { label: "Verified doctors", target: 500, step: 10, suffix: "+" },
    StatSpec { label: "Happy patients", target: 50_000, step: 1_000, suffix: "+" },
    StatSpec { label: "Satisfaction", target: 98, step: 2, suffix: "%" },
    StatSpec { label: "Support", target: 24, step: 1, suffix: "/7" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🔍",
        title: "Find the right specialist",
        description: "Search by name, specialty or city and compare verified profiles side by side.",
        animation: "fadeUp",
    },
    Feature {
        icon: "📅",
        title: "Book in seconds",
        description: "Pick an open slot that suits you. No phone calls, no waiting on hold.",
        animation: "slideLeft",
    },
    Feature {
        icon: "⭐",
        title: "Honest reviews",
        description: "Ratings come from patients who actually visited, so you know what to expect.",
        animation: "slideRight",
    },
    Feature {
        icon: "🔔",
        title: "Smart reminders",
        description: "Get a nudge before every appointment and never miss a follow-up again.",
        animation: "scale",
    },
    Feature {
        icon: "🔒",
        title: "Private by default",
        description: "Your health details stay between you and your doctor.",
        animation: "fadeIn",
    },
    Feature {
        icon: "💬",
        title: "Video consults",
        description: "Talk to a doctor from home when a visit is not necessary.",
        animation: "fadeUp",
    },
];

pub const STEPS: &[(&str, &str)] = &[
    ("Search", "Tell us what you need and where you are."),
    ("Compare", "Check experience, fees and reviews at a glance."),
    ("Book", "Reserve your slot and get instant confirmation."),
];

pub const DOCTORS: &[Doctor] = &[
    Doctor {
        id: 1,
        name: "Dr. Ananya Sharma",
        specialization: "Cardiology",
        experience: "15 years experience",
        fee: "₹800 consultation",
        city: "Mumbai",
        rating: 4.8,
        reviews: 312,
        available: true,
        image: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=400",
        badges: &["Top rated", "Video consult"],
        quick_stats: Some(QuickStats { patients: "2.4K+", success_rate: 98, next_slot: "Today, 4:30 PM" }),
    },
    Doctor {
        id: 2,
        name: "Dr. Rohan Mehta",
        specialization: "Orthopedics",
        experience: "12 years experience",
        fee: "₹700 consultation",
        city: "Delhi",
        rating: 4.5,
        reviews: 198,
        available: true,
        image: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=400",
        badges: &["Sports injuries"],
        quick_stats: Some(QuickStats { patients: "1.8K+", success_rate: 96, next_slot: "Tomorrow, 10:00 AM" }),
    },
    Doctor {
        id: 3,
        name: "Dr. Priya Nair",
        specialization: "Dermatology",
        experience: "9 years experience",
        fee: "₹600 consultation",
        city: "Bangalore",
        rating: 4.0,
        reviews: 143,
        available: false,
        image: "https://images.unsplash.com/photo-1594824476967-48c8b964273f?w=400",
        badges: &["Skin care"],
        quick_stats: None,
    },
    Doctor {
        id: 4,
        name: "Dr. Vikram Rao",
        specialization: "Neurology",
        experience: "20 years experience",
        fee: "₹1200 consultation",
        city: "Hyderabad",
        rating: 4.9,
        reviews: 421,
        available: true,
        image: "https://images.unsplash.com/photo-1622253692010-333f2da6031d?w=400",
        badges: &["Top rated", "Senior consultant"],
        quick_stats: Some(QuickStats { patients: "5K+", success_rate: 99, next_slot: "Fri, 11:15 AM" }),
    },
    Doctor {
        id: 5,
        name: "Dr. Kavya Iyer",
        specialization: "Pediatrics",
        experience: "7 years experience",
        fee: "₹500 consultation",
        city: "Chennai",
        rating: 4.6,
        reviews: 267,
        available: true,
        image: "https://images.unsplash.com/photo-1651008376811-b90baee60c1f?w=400",
        badges: &["Child friendly", "Video consult"],
        quick_stats: Some(QuickStats { patients: "3.1K+", success_rate: 97, next_slot: "Today, 6:00 PM" }),
    },
    Doctor {
        id: 6,
        name: "Dr. Arjun Kapoor",
        specialization: "Dentistry",
        experience: "11 years experience",
        fee: "₹400 consultation",
        city: "Pune",
        rating: 3.7,
        reviews: 89,
        available: true,
        image: "https://images.unsplash.com/photo-1537368910025-700350fe46c7?w=400",
        badges: &[],
        quick_stats: None,
    },
    Doctor {
        id: 7,
        name: "Dr. Meera Banerjee",
        specialization: "Cardiology",
        experience: "18 years experience",
        fee: "₹1000 consultation",
        city: "Kolkata",
        rating: 4.7,
        reviews: 356,
        available: false,
        image: "https://images.unsplash.com/photo-1527613426441-4da17471b66d?w=400",
        badges: &["Senior consultant"],
        quick_stats: Some(QuickStats { patients: "4.2K+", success_rate: 98, next_slot: "Next week" }),
    },
    Doctor {
        id: 8,
        name: "Dr. Sameer Khan",
        specialization: "Dermatology",
        experience: "6 years experience",
        fee: "₹550 consultation",
        city: "Mumbai",
        rating: 4.3,
        reviews: 112,
        available: true,
        image: "https://images.unsplash.com/photo-1582750433449-648ed127bb54?w=400",
        badges: &["Video consult"],
        quick_stats: None,
    },
];

pub fn find_doctor(id: u32) -> Option<&'static Doctor> {
    DOCTORS.iter().find(|doctor| doctor.id == id)
}

pub fn specialty_label(key: &str) -> Option<&'static str> {
    SPECIALTIES
        .iter()
        .find(|specialty| specialty.key == key)
        .map(|specialty| specialty.label)
}
