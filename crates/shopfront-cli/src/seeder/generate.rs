//! Fake document generation.

use bson::oid::ObjectId;
use fake::Fake;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;
use rand::seq::SliceRandom;
use shopfront_models::{Category, Product, User};

const CATEGORY_NAMES: &[&str] = &[
    "Books",
    "Electronics",
    "Clothing",
    "Home",
    "Toys",
    "Sports",
    "Garden",
    "Music",
];

/// Users with unique `example.com` addresses, all sharing one password hash.
pub fn generate_users(count: usize, password_hash: &str) -> Vec<User> {
    (0..count)
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let email = format!(
                "{}.{}+{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                idx
            );
            User::new(format!("{first_name} {last_name}"), email, password_hash)
        })
        .collect()
}

/// Categories owned by random users. Names repeat the base list with a
/// numeric suffix once it is exhausted.
pub fn generate_categories(count: usize, owners: &[User]) -> Vec<Category> {
    let mut rng = rand::thread_rng();

    (0..count)
        .filter_map(|idx| {
            let owner = owners.choose(&mut rng)?;
            let base = CATEGORY_NAMES[idx % CATEGORY_NAMES.len()];
            let name = match idx / CATEGORY_NAMES.len() {
                0 => base.to_string(),
                round => format!("{base} {}", round + 1),
            };
            Some(Category {
                id: ObjectId::new(),
                name,
                available: rng.gen_bool(0.8),
                user: owner.id,
            })
        })
        .collect()
}

/// Products with a random owner and category.
pub fn generate_products(count: usize, owners: &[User], categories: &[Category]) -> Vec<Product> {
    let mut rng = rand::thread_rng();

    (0..count)
        .filter_map(|idx| {
            let owner = owners.choose(&mut rng)?;
            let category = categories.choose(&mut rng)?;
            let word: String = Word().fake();
            let cents: u32 = rng.gen_range(100..50_000);
            Some(Product {
                id: ObjectId::new(),
                name: format!("{} {}", capitalize(&word), idx + 1),
                available: rng.gen_bool(0.7),
                price: f64::from(cents) / 100.0,
                description: Some(format!("{} from the {} range", word, category.name)),
                user: owner.id,
                category: category.id,
            })
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
