use shopfront_core::{AppError, PageMeta, Pagination};
use shopfront_db::{CategoryRepository, DbError};
use shopfront_models::{
    CategoryResponse, CreateCategoryDto, NewCategory, PaginatedCategoriesResponse, User,
};
use shopfront_observability::track_category_created;
use tracing::instrument;

const BASE_PATH: &str = "/api/categories";

pub struct CategoryService;

impl CategoryService {
    #[instrument(skip(categories, dto, user), fields(name = %dto.name, user_id = %user.id))]
    pub async fn create_category(
        categories: &dyn CategoryRepository,
        dto: CreateCategoryDto,
        user: &User,
    ) -> Result<CategoryResponse, AppError> {
        if categories
            .exists_by_name(&dto.name)
            .await
            .map_err(DbError::into_app_error)?
        {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Category already exists"
            )));
        }

        let category = categories
            .create(NewCategory {
                name: dto.name,
                available: dto.available.unwrap_or(false),
                user: user.id,
            })
            .await
            .map_err(DbError::into_app_error)?;

        track_category_created();
        Ok(category.into())
    }

    #[instrument(skip(categories))]
    pub async fn get_categories(
        categories: &dyn CategoryRepository,
        pagination: Pagination,
    ) -> Result<PaginatedCategoriesResponse, AppError> {
        let (total, page) = tokio::try_join!(
            categories.count(),
            categories.list(pagination.offset(), pagination.limit),
        )
        .map_err(DbError::into_app_error)?;

        Ok(PaginatedCategoriesResponse {
            meta: PageMeta::new(&pagination, total, BASE_PATH),
            categories: page.into_iter().map(CategoryResponse::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use shopfront_db::memory::InMemoryDb;

    fn owner() -> User {
        User::new("Owner", "owner@example.com", "hash")
    }

    fn dto(name: &str) -> CreateCategoryDto {
        CreateCategoryDto {
            name: name.to_string(),
            available: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_available_to_false() {
        let db = InMemoryDb::new();
        let created = CategoryService::create_category(&db, dto("Books"), &owner())
            .await
            .unwrap();
        assert_eq!(created.name, "Books");
        assert!(!created.available);
    }

    #[tokio::test]
    async fn test_create_duplicate_name() {
        let db = InMemoryDb::new();
        let user = owner();
        CategoryService::create_category(&db, dto("Books"), &user)
            .await
            .unwrap();

        let err = CategoryService::create_category(&db, dto("Books"), &user)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Category already exists");
    }

    #[tokio::test]
    async fn test_list_second_page() {
        let db = InMemoryDb::new();
        let user = owner();
        for i in 0..7 {
            CategoryService::create_category(&db, dto(&format!("Category {i}")), &user)
                .await
                .unwrap();
        }

        let page = CategoryService::get_categories(&db, Pagination { page: 2, limit: 5 })
            .await
            .unwrap();
        assert_eq!(page.meta.total, 7);
        assert_eq!(page.categories.len(), 2);
        assert_eq!(page.categories[0].name, "Category 5");
        assert_eq!(
            page.meta.prev.as_deref(),
            Some("/api/categories?page=1&limit=5")
        );
    }
}
