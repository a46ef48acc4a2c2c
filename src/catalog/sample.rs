//! Default product dataset used by the headless driver and tests.

use super::product::{Product, RentalUnit};

/// The built-in demo catalog: eight products across five categories.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Professional DSLR Camera".to_string(),
            image: "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?w=400&q=80"
                .to_string(),
            price: 35.0,
            unit: RentalUnit::PerDay,
            rating: 4.8,
            location: "New York, NY".to_string(),
            distance: "0.8 miles away".to_string(),
            available: true,
            category: "electronics".to_string(),
            brand: "canon".to_string(),
        },
        Product {
            id: "2".to_string(),
            name: "Mountain Bike".to_string(),
            image: "https://images.unsplash.com/photo-1485965120184-e220f721d03e?w=400&q=80"
                .to_string(),
            price: 25.0,
            unit: RentalUnit::PerDay,
            rating: 4.5,
            location: "New York, NY".to_string(),
            distance: "1.2 miles away".to_string(),
            available: true,
            category: "sports".to_string(),
            brand: "trek".to_string(),
        },
        Product {
            id: "3".to_string(),
            name: "Portable Projector".to_string(),
            image: "https://images.unsplash.com/photo-1626379953822-baec19c3accd?w=400&q=80"
                .to_string(),
            price: 20.0,
            unit: RentalUnit::PerDay,
            rating: 4.2,
            location: "New York, NY".to_string(),
            distance: "0.5 miles away".to_string(),
            available: false,
            category: "electronics".to_string(),
            brand: "epson".to_string(),
        },
        Product {
            id: "4".to_string(),
            name: "Camping Tent (4-Person)".to_string(),
            image: "https://images.unsplash.com/photo-1504280390367-361c6d9f38f4?w=400&q=80"
                .to_string(),
            price: 30.0,
            unit: RentalUnit::PerDay,
            rating: 4.7,
            location: "New York, NY".to_string(),
            distance: "2.1 miles away".to_string(),
            available: true,
            category: "outdoors".to_string(),
            brand: "coleman".to_string(),
        },
        Product {
            id: "5".to_string(),
            name: "Electric Drill".to_string(),
            image: "https://images.unsplash.com/photo-1572981779307-38b8cabb2407?w=400&q=80"
                .to_string(),
            price: 15.0,
            unit: RentalUnit::PerDay,
            rating: 4.0,
            location: "New York, NY".to_string(),
            distance: "1.5 miles away".to_string(),
            available: true,
            category: "tools".to_string(),
            brand: "dewalt".to_string(),
        },
        Product {
            id: "6".to_string(),
            name: "DJ Equipment Set".to_string(),
            image: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=400&q=80"
                .to_string(),
            price: 75.0,
            unit: RentalUnit::PerDay,
            rating: 4.9,
            location: "New York, NY".to_string(),
            distance: "3.2 miles away".to_string(),
            available: true,
            category: "music".to_string(),
            brand: "pioneer".to_string(),
        },
        Product {
            id: "7".to_string(),
            name: "Road Bicycle".to_string(),
            image: "https://images.unsplash.com/photo-1532298229144-0ec0c57515c7?w=400&q=80"
                .to_string(),
            price: 28.0,
            unit: RentalUnit::PerDay,
            rating: 4.6,
            location: "New York, NY".to_string(),
            distance: "0.9 miles away".to_string(),
            available: true,
            category: "sports".to_string(),
            brand: "specialized".to_string(),
        },
        Product {
            id: "8".to_string(),
            name: "Drone with Camera".to_string(),
            image: "https://images.unsplash.com/photo-1579829366248-204fe8413f31?w=400&q=80"
                .to_string(),
            price: 45.0,
            unit: RentalUnit::PerDay,
            rating: 4.4,
            location: "New York, NY".to_string(),
            distance: "1.7 miles away".to_string(),
            available: true,
            category: "electronics".to_string(),
            brand: "dji".to_string(),
        },
    ]
}
