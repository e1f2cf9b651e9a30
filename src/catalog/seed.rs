use crate::models::{Property, PropertyCategory, PropertyType};

/// Seed listings shown before any admin has touched the catalog.
/// Ids are assigned here and stay stable; the query engine's "newest"
/// ordering is exactly this insertion order.
pub(super) fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            title: "Çorum Merkez Lüks Villa".to_string(),
            description: "Çorum şehir merkezinde, modern mimariye sahip lüks villa. \
                          Geniş bahçe, özel havuz ve akıllı ev sistemleri ile donatılmıştır."
                .to_string(),
            kind: PropertyType::Sale,
            category: PropertyCategory::Villa,
            price: 2_800_000,
            location: "Çorum Merzifon".to_string(),
            city: "Çorum".to_string(),
            bedrooms: Some(5),
            bathrooms: Some(4),
            area: 450,
            images: vec![
                "/luxury-villa-sea-view-modern-architecture.jpg".to_string(),
                "/villa-interior-luxury-living-room.jpg".to_string(),
                "/villa-pool-garden-outdoor.jpg".to_string(),
            ],
            features: vec![
                "Geniş Bahçe".to_string(),
                "Özel Havuz".to_string(),
                "Akıllı Ev".to_string(),
                "Kapalı Otopark".to_string(),
                "Güvenlik".to_string(),
            ],
            phone: "+90 532 123 4567".to_string(),
            featured: true,
            active: true,
        },
        Property {
            id: "2".to_string(),
            title: "Merzifon Merkezi Modern Daire".to_string(),
            description: "Merzifon şehir merkezinde, hastane ve okullara yakın, yeni yapılmış \
                          modern daire. Tüm ihtiyaçlarınıza yakın konumda."
                .to_string(),
            kind: PropertyType::Rent,
            category: PropertyCategory::Apartment,
            price: 8_500,
            location: "Merzifon, Cumhuriyet Mahallesi".to_string(),
            city: "Çorum".to_string(),
            bedrooms: Some(3),
            bathrooms: Some(2),
            area: 140,
            images: vec![
                "/modern-apartment-living-room-city-view.jpg".to_string(),
                "/modern-kitchen-white-cabinets.jpg".to_string(),
                "/modern-bedroom-minimalist.jpg".to_string(),
            ],
            features: vec![
                "Asansör".to_string(),
                "Otopark".to_string(),
                "Balkon".to_string(),
                "Doğalgaz".to_string(),
                "Güvenlik".to_string(),
            ],
            phone: "+90 532 123 4567".to_string(),
            featured: true,
            active: true,
        },
        Property {
            id: "3".to_string(),
            title: "Mese Residence Çorum Projesi".to_string(),
            description: "Mese İnşaat'ın Çorum'daki yeni projesi. Modern yaşam alanları, \
                          sosyal tesisler ve güvenlikli site içerisinde konforlu yaşam."
                .to_string(),
            kind: PropertyType::Project,
            category: PropertyCategory::Apartment,
            price: 1_200_000,
            location: "Çorum, Yenidoğan Mahallesi".to_string(),
            city: "Çorum".to_string(),
            bedrooms: Some(3),
            bathrooms: Some(2),
            area: 125,
            images: vec![
                "/modern-residential-complex.png".to_string(),
                "/residential-complex-pool-facilities.jpg".to_string(),
                "/modern-apartment-interior-new-construction.jpg".to_string(),
            ],
            features: vec![
                "Yüzme Havuzu".to_string(),
                "Spor Salonu".to_string(),
                "Çocuk Parkı".to_string(),
                "Güvenlik".to_string(),
                "Otopark".to_string(),
            ],
            phone: "+90 532 123 4567".to_string(),
            featured: true,
            active: true,
        },
        Property {
            id: "4".to_string(),
            title: "Merzifon İş Merkezi Ofis".to_string(),
            description: "Merzifon iş merkezinde, prestijli plaza içerisinde kiralık ofis. \
                          Toplantı odaları ve modern altyapı ile donatılmış."
                .to_string(),
            kind: PropertyType::Rent,
            category: PropertyCategory::Office,
            price: 12_000,
            location: "Merzifon, İstiklal Caddesi".to_string(),
            city: "Çorum".to_string(),
            bedrooms: None,
            bathrooms: None,
            area: 200,
            images: vec![
                "/modern-office-space-glass-windows.jpg".to_string(),
                "/office-meeting-room-modern.jpg".to_string(),
                "/office-workspace-desks.jpg".to_string(),
            ],
            features: vec![
                "7/24 Güvenlik".to_string(),
                "Otopark".to_string(),
                "Jeneratör".to_string(),
                "Klima".to_string(),
                "Asansör".to_string(),
            ],
            phone: "+90 532 123 4567".to_string(),
            featured: false,
            active: true,
        },
        Property {
            id: "5".to_string(),
            title: "Çorum Yatırımlık Arsa".to_string(),
            description: "Çorum-Ankara karayolu üzerinde, imar planlı arsa. Yatırım için \
                          ideal konum."
                .to_string(),
            kind: PropertyType::Sale,
            category: PropertyCategory::Land,
            price: 1_800_000,
            location: "Çorum, Çamlıca Mahallesi".to_string(),
            city: "Çorum".to_string(),
            bedrooms: None,
            bathrooms: None,
            area: 1000,
            images: vec![
                "/empty-land-plot-investment.jpg".to_string(),
                "/land-aerial-view.jpg".to_string(),
                "/land-plot-road-access.jpg".to_string(),
            ],
            features: vec![
                "İmar Planlı".to_string(),
                "Ana Yol Cepheli".to_string(),
                "Elektrik".to_string(),
                "Su".to_string(),
            ],
            phone: "+90 532 123 4567".to_string(),
            featured: false,
            active: true,
        },
        Property {
            id: "6".to_string(),
            title: "Merzifon Bahçeli Müstakil Ev".to_string(),
            description: "Merzifon'un sakin bir mahallesinde, geniş bahçeli müstakil ev. \
                          Aile yaşamı için ideal."
                .to_string(),
            kind: PropertyType::Sale,
            category: PropertyCategory::Villa,
            price: 1_950_000,
            location: "Merzifon, Gülveren Mahallesi".to_string(),
            city: "Çorum".to_string(),
            bedrooms: Some(4),
            bathrooms: Some(3),
            area: 280,
            images: vec![
                "/detached-house-garden-family-home.jpg".to_string(),
                "/house-interior-cozy-living-room.jpg".to_string(),
                "/house-backyard-garden.jpg".to_string(),
            ],
            features: vec![
                "Bahçe".to_string(),
                "Otopark".to_string(),
                "Şömine".to_string(),
                "Teras".to_string(),
                "Güvenlik".to_string(),
            ],
            phone: "+90 532 123 4567".to_string(),
            featured: false,
            active: true,
        },
        Property {
            id: "7".to_string(),
            title: "Çorum Üniversite Yakını Stüdyo".to_string(),
            description: "Çorum Hitit Üniversitesi'ne yakın, eşyalı stüdyo daire. \
                          Öğrenciler için uygun fiyatlı."
                .to_string(),
            kind: PropertyType::Rent,
            category: PropertyCategory::Apartment,
            price: 4_500,
            location: "Çorum, Üniversite Mahallesi".to_string(),
            city: "Çorum".to_string(),
            bedrooms: Some(1),
            bathrooms: Some(1),
            area: 45,
            images: vec![
                "/placeholder.svg?height=600&width=800".to_string(),
                "/placeholder.svg?height=600&width=800".to_string(),
                "/placeholder.svg?height=600&width=800".to_string(),
            ],
            features: vec![
                "Eşyalı".to_string(),
                "İnternet".to_string(),
                "Doğalgaz".to_string(),
                "Asansör".to_string(),
            ],
            phone: "+90 532 123 4567".to_string(),
            featured: false,
            active: true,
        },
        Property {
            id: "8".to_string(),
            title: "Mese Park Merzifon Evleri".to_string(),
            description: "Merzifon'da yeşil alanlarla çevrili, modern villa konseptli proje. \
                          Doğayla iç içe yaşam."
                .to_string(),
            kind: PropertyType::Project,
            category: PropertyCategory::Villa,
            price: 2_200_000,
            location: "Merzifon, Yeşiltepe Mahallesi".to_string(),
            city: "Çorum".to_string(),
            bedrooms: Some(4),
            bathrooms: Some(3),
            area: 320,
            images: vec![
                "/placeholder.svg?height=600&width=800".to_string(),
                "/placeholder.svg?height=600&width=800".to_string(),
                "/placeholder.svg?height=600&width=800".to_string(),
            ],
            features: vec![
                "Yeşil Alan".to_string(),
                "Güvenlik".to_string(),
                "Sosyal Tesis".to_string(),
                "Otopark".to_string(),
                "Çocuk Parkı".to_string(),
            ],
            phone: "+90 532 123 4567".to_string(),
            featured: false,
            active: true,
        },
    ]
}
