use anyhow::Result;
use sea_orm::{ActiveValue::NotSet, EntityTrait, PaginatorTrait, Set};

use crate::{
    db::OrmConn,
    entity::products::{ActiveModel as ProductActive, Entity as Products},
};

pub struct SeedProduct {
    pub name: &'static str,
    pub material: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const SEED_PRODUCTS: [SeedProduct; 4] = [
    SeedProduct {
        name: "Midnight Silk",
        material: "Pure Italian Crepe",
        price: "AED 3,850",
        image: "https://lh3.googleusercontent.com/aida-public/AB6AXuBN2nKDSKGK-JasfegETiPKq--OVnFmWJhUpj-Q0AvcUXGVUzqvQFIpjCllBwzqnR2ZOu6rImVSRrlGRhulzh0mbaVj_obAIzRVfZlsLlzS18V5A_v_4AWMBhkMYmbGoMspwFZJmQLOCW9NJEBAaO1uHl8fCUMNdyLeiiBIMOLuBJ_I6_ftOJ1G4Ttk6Y08C_8OiVxDTXjcRYN0KKvtL6ET2u4yC2HfdIfIdVGWSpv7G_SUp4zwO2fM7cI-NGZ2V3ffGlBJfWwwv44",
        description: "A masterpiece of Italian crepe, designed for the modern visionary who values understated elegance.",
    },
    SeedProduct {
        name: "Emerald Velvet",
        material: "Premium Hand-Stitched",
        price: "AED 5,200",
        image: "https://lh3.googleusercontent.com/aida-public/AB6AXuDHlj18n84ncQDuXc0hTcguDEZNN_hJ-DZDy8uxf6bGE8SJHyjLudCTjCxxkqS5OGL914b7TliFBDgZpJW-xNyGqpKi-e91aQu-jFDvSMY8zzn4ncdfKWDcBrN8XNH8zmkekXbqNuuvby0_IDg8As_CvkcT7b2Pgw8u9cKZnrZ7nM5mTgvSMhCvgFxbeyWBDK18xbV-3tPcR14ZSDMJwn-s6Kq1EbK9EzkNBWdKYeq4al_yOVhnE_ymfYVjxLP_0eZlTobPApx3Gg0",
        description: "Rich emerald velvet adorned with intricate hand-stitched patterns that catch the light beautifully.",
    },
    SeedProduct {
        name: "Pearl Essence",
        material: "Bridal Silk Series",
        price: "AED 6,100",
        image: "https://lh3.googleusercontent.com/aida-public/AB6AXuBu1gfL3vSzgElxL9MDjMOCsJxqxGEdpO8muruViwaQQi_0GokzbppqSWIegln51XfgahffxDwJig-8rymg0qBaqetCmB7_cjDQK2qdmZZ-h84gFoCJZW5A65QRyd2NTQcD4btNGfa6fbH_Q1zq6AvAUvySG4I-v6wTDQZm4PO34LwVHOteKtiM9P5mmD_QlZu5dNI_ukZqPVefrzCRujX46Ha4Ow7UyTNslyAkIm7Exwc5_m614IEv4NhWnMoCu5iVtRjkfur4lMw",
        description: "The pinnacle of our bridal series, featuring luminous silk and delicate detailing for your most special moments.",
    },
    SeedProduct {
        name: "Onyx Wrap",
        material: "Textured Chiffon",
        price: "AED 2,900",
        image: "https://lh3.googleusercontent.com/aida-public/AB6AXuDNqC7-KtQtNVPq3S4DctPOklrxJ3D7Ugu4MJskFfxzEYCFS1fVmWKXv9kKBiXyE6gn5SamZWEBx6JMAtfjMv6Q_vrqkisMvWu7Y4p8PxgC1QLkv4dpzmwQlJOM1HGDHT9ZUTiKKpAs1mr4AYUKyzCY5zr4OGpiDqZWFIENsaKwncLfPheKU_Y1Axn6ogxN1xUBrD9wSB9aKEuS0PI2E3cUQGF_Bt8BusxRDhBpbI8XQQ-ZZmj7PoqTq9zrdywMebSJ72eiKFI_Ew8",
        description: "A versatile onyx wrap in textured chiffon, offering a lightweight and breathable silhouette for daily luxury.",
    },
];

/// Insert the seed catalog when the product table is empty. Returns the number of rows inserted.
pub async fn seed_if_empty(orm: &OrmConn) -> Result<u64> {
    if Products::find().count(orm).await? > 0 {
        return Ok(0);
    }

    let rows = SEED_PRODUCTS.iter().map(|p| ProductActive {
        id: NotSet,
        name: Set(p.name.to_string()),
        material: Set(Some(p.material.to_string())),
        price: Set(p.price.to_string()),
        image: Set(p.image.to_string()),
        description: Set(Some(p.description.to_string())),
    });
    Products::insert_many(rows).exec(orm).await?;

    Ok(SEED_PRODUCTS.len() as u64)
}
