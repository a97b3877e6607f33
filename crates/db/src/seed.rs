//! Demo catalog seeding.
//!
//! Inserts a small set of regions, tours, products and published blog posts
//! so a fresh database has something to browse. Runs only against an empty
//! `regions` table, so calling it on every startup is safe.

use chrono::{TimeZone, Utc};
use kartuli_core::catalog::{
    PRODUCT_CATEGORY_CRAFTS, PRODUCT_CATEGORY_FOOD, PRODUCT_CATEGORY_SOUVENIRS,
    PRODUCT_CATEGORY_WINE, TOUR_CATEGORY_ADVENTURE, TOUR_CATEGORY_CULINARY,
    TOUR_CATEGORY_CULTURAL, TOUR_CATEGORY_WINE,
};
use kartuli_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_post::CreateBlogPost;
use crate::models::product::CreateProduct;
use crate::models::region::CreateRegion;
use crate::models::tour::CreateTour;
use crate::repositories::{BlogPostRepo, ProductRepo, RegionRepo, TourRepo};

/// Seed the demo catalog. Returns `false` without touching anything when
/// regions already exist.
pub async fn seed_catalog(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let (populated,): (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM regions)")
        .fetch_one(pool)
        .await?;
    if populated {
        tracing::debug!("Catalog already populated, skipping seed");
        return Ok(false);
    }

    let mut region_ids: Vec<DbId> = Vec::new();
    for input in regions() {
        region_ids.push(RegionRepo::create(pool, &input).await?.id);
    }

    let tours = tours(&region_ids);
    let products = products();
    let posts = blog_posts();

    for input in &tours {
        TourRepo::create(pool, input).await?;
    }
    for input in &products {
        ProductRepo::create(pool, input).await?;
    }
    for input in &posts {
        BlogPostRepo::create(pool, input).await?;
    }

    tracing::info!(
        regions = region_ids.len(),
        tours = tours.len(),
        products = products.len(),
        blog_posts = posts.len(),
        "Seeded demo catalog",
    );
    Ok(true)
}

fn regions() -> Vec<CreateRegion> {
    vec![
        CreateRegion {
            name: "Kakheti".into(),
            name_ka: Some("კახეთი".into()),
            name_ru: Some("Кахетия".into()),
            description: "The wine region of Georgia, home to ancient winemaking traditions \
                          and vineyard landscapes."
                .into(),
            description_ru: Some(
                "Винодельческий регион Грузии, родина древних традиций виноделия.".into(),
            ),
            image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96".into(),
            main_attraction: "Ancient wine cellars and vineyards".into(),
            location: Some("Eastern Georgia".into()),
            best_time_to_visit: Some("September to October, during rtveli".into()),
            climate: Some("Continental, hot summers".into()),
            how_to_reach: Some("Two hours by car from Tbilisi".into()),
            slug: "kakheti".into(),
            featured: Some(true),
            ..Default::default()
        },
        CreateRegion {
            name: "Svaneti".into(),
            name_ka: Some("სვანეთი".into()),
            name_ru: Some("Сванетия".into()),
            description: "A highland region known for its medieval towers and mountain \
                          landscapes."
                .into(),
            description_ru: Some(
                "Горный регион, известный средневековыми башнями и горными пейзажами.".into(),
            ),
            image_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4".into(),
            main_attraction: "Medieval Svan towers".into(),
            location: Some("Greater Caucasus, north-west Georgia".into()),
            best_time_to_visit: Some("June to September".into()),
            climate: Some("Alpine".into()),
            how_to_reach: Some("Flight to Mestia or a day's drive from Zugdidi".into()),
            slug: "svaneti".into(),
            featured: Some(true),
            ..Default::default()
        },
        CreateRegion {
            name: "Samegrelo".into(),
            name_ka: Some("სამეგრელო".into()),
            name_ru: Some("Самегрело".into()),
            description: "A region rich in Mingrelian culture, known for its cuisine and \
                          hospitality."
                .into(),
            image_url: "https://images.unsplash.com/photo-1590736969955-71cc94901144".into(),
            main_attraction: "Mingrelian cultural sites".into(),
            slug: "samegrelo".into(),
            ..Default::default()
        },
        CreateRegion {
            name: "Imereti".into(),
            name_ka: Some("იმერეთი".into()),
            name_ru: Some("Имерети".into()),
            description: "The central region of Georgia, from karst caves to vineyards.".into(),
            image_url: "https://images.unsplash.com/photo-1536431311719-398b6704d4cc".into(),
            main_attraction: "Prometheus Cave and vineyards".into(),
            slug: "imereti".into(),
            ..Default::default()
        },
    ]
}

/// Tours reference regions by position in [`regions`].
fn tours(region_ids: &[DbId]) -> Vec<CreateTour> {
    let region = |idx: usize| region_ids.get(idx).copied();
    vec![
        CreateTour {
            title: "Kakheti Wine Heritage Tour".into(),
            title_ka: Some("კახეთის ღვინის მემკვიდრეობის ტური".into()),
            description: "Qvevri cellars, tastings and a traditional supra lunch.".into(),
            price: "150.00".into(),
            duration: "Full Day".into(),
            max_people: 12,
            includes: "Transportation, wine tasting, traditional lunch, guide".into(),
            category: TOUR_CATEGORY_WINE.into(),
            image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96".into(),
            region_id: region(0),
            featured: Some(true),
            ..Default::default()
        },
        CreateTour {
            title: "Svaneti Mountain Adventure".into(),
            title_ka: Some("სვანეთის მთის თავგადასავალი".into()),
            description: "Discover the medieval towers and mountain culture of Upper Svaneti."
                .into(),
            price: "200.00".into(),
            duration: "2 Days".into(),
            max_people: 8,
            includes: "Mountain guide, accommodation, meals, transportation".into(),
            category: TOUR_CATEGORY_ADVENTURE.into(),
            image_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4".into(),
            region_id: region(1),
            featured: Some(true),
            ..Default::default()
        },
        CreateTour {
            title: "Samegrelo Culinary Experience".into(),
            description: "Cook elarji and gebzhalia with a Mingrelian family.".into(),
            price: "120.00".into(),
            duration: "Half Day".into(),
            max_people: 15,
            includes: "Cooking class, traditional meal, local guide".into(),
            category: TOUR_CATEGORY_CULINARY.into(),
            image_url: "https://images.unsplash.com/photo-1590736969955-71cc94901144".into(),
            region_id: region(2),
            ..Default::default()
        },
        CreateTour {
            title: "Kutaisi Heritage Walk".into(),
            description: "Bagrati Cathedral, Gelati Monastery and the old town.".into(),
            price: "80.00".into(),
            duration: "Half Day".into(),
            max_people: 20,
            includes: "Professional guide, entrance fees".into(),
            category: TOUR_CATEGORY_CULTURAL.into(),
            image_url: "https://images.unsplash.com/photo-1536431311719-398b6704d4cc".into(),
            region_id: region(3),
            ..Default::default()
        },
    ]
}

fn products() -> Vec<CreateProduct> {
    vec![
        CreateProduct {
            name: "Kakheti Saperavi 2020".into(),
            name_ka: Some("კახური საფერავი 2020".into()),
            description: "Dry red wine made by the qvevri method.".into(),
            price: "45.00".into(),
            category: PRODUCT_CATEGORY_WINE.into(),
            image_url: "https://images.unsplash.com/photo-1506377247377-2a5b3b417ebb".into(),
            featured: Some(true),
            ..Default::default()
        },
        CreateProduct {
            name: "Rkatsiteli 2021".into(),
            description: "Amber white wine from an indigenous grape variety.".into(),
            price: "38.00".into(),
            category: PRODUCT_CATEGORY_WINE.into(),
            image_url: "https://images.unsplash.com/photo-1506377247377-2a5b3b417ebb".into(),
            ..Default::default()
        },
        CreateProduct {
            name: "Svan Salt".into(),
            name_ka: Some("სვანური მარილი".into()),
            description: "Traditional seasoning blend from the Svaneti highlands.".into(),
            price: "12.00".into(),
            category: PRODUCT_CATEGORY_FOOD.into(),
            image_url: "https://images.unsplash.com/photo-1596040033229-a9821ebd058d".into(),
            ..Default::default()
        },
        CreateProduct {
            name: "Churchkhela".into(),
            description: "Walnuts dipped in thickened grape juice.".into(),
            price: "15.00".into(),
            category: PRODUCT_CATEGORY_FOOD.into(),
            image_url: "https://images.unsplash.com/photo-1587049352851-8d4e89133924".into(),
            featured: Some(true),
            ..Default::default()
        },
        CreateProduct {
            name: "Hand-thrown Clay Wine Jug".into(),
            description: "Glazed clay jug for serving wine at the table.".into(),
            price: "65.00".into(),
            category: PRODUCT_CATEGORY_CRAFTS.into(),
            image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96".into(),
            ..Default::default()
        },
        CreateProduct {
            name: "Svan Tower Miniature".into(),
            description: "Carved stone model of a Svan defensive tower.".into(),
            price: "25.00".into(),
            category: PRODUCT_CATEGORY_SOUVENIRS.into(),
            image_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4".into(),
            in_stock: Some(false),
            ..Default::default()
        },
    ]
}

fn blog_posts() -> Vec<CreateBlogPost> {
    vec![
        CreateBlogPost {
            title: "The Sacred Art of Georgian Supra".into(),
            excerpt: "The cultural weight behind Georgia's traditional feast.".into(),
            content: "The supra is more than a feast. Led by the tamada, a sequence of toasts \
                      honors guests, ancestors and the homeland."
                .into(),
            category: "Culture".into(),
            image_url: "https://images.unsplash.com/photo-1574484284002-952d92456975".into(),
            slug: "sacred-art-georgian-supra".into(),
            published: Some(true),
            published_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).single(),
            ..Default::default()
        },
        CreateBlogPost {
            title: "Winemaking Traditions in Modern Georgia".into(),
            excerpt: "How qvevri winemaking is having a renaissance.".into(),
            content: "Georgia's eight-thousand-year winemaking tradition is thriving, with \
                      small family cellars reviving clay-vessel fermentation."
                .into(),
            category: "Wine".into(),
            image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96".into(),
            slug: "winemaking-traditions-modern-georgia".into(),
            published: Some(true),
            published_at: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).single(),
            ..Default::default()
        },
    ]
}
