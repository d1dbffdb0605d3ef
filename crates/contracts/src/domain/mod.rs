pub mod a001_product;
pub mod a002_category;
pub mod a003_sub_category;
pub mod a004_brand;
pub mod a005_offer;
pub mod a006_promo_code;
pub mod a007_banner;
pub mod a008_order;
