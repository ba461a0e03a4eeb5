use shopfront_core::{AppError, PageMeta, Pagination};
use shopfront_db::{CategoryRepository, DbError, ProductRepository};
use shopfront_models::{
    CreateProductDto, NewProduct, PaginatedProductsResponse, PopulatedProductResponse,
    ProductResponse, User, parse_object_id,
};
use shopfront_observability::track_product_created;
use tracing::instrument;

const BASE_PATH: &str = "/api/products";

pub struct ProductService;

impl ProductService {
    /// Creates a product owned by `user` in an existing category.
    #[instrument(skip(products, categories, dto, user), fields(name = %dto.name, user_id = %user.id))]
    pub async fn create_product(
        products: &dyn ProductRepository,
        categories: &dyn CategoryRepository,
        dto: CreateProductDto,
        user: &User,
    ) -> Result<ProductResponse, AppError> {
        if products
            .exists_by_name(&dto.name)
            .await
            .map_err(DbError::into_app_error)?
        {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Product already exists"
            )));
        }

        let category_id = parse_object_id(&dto.category)
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Invalid category id")))?;
        if categories
            .find_by_id(category_id)
            .await
            .map_err(DbError::into_app_error)?
            .is_none()
        {
            return Err(AppError::bad_request(anyhow::anyhow!("Category not found")));
        }

        let product = products
            .create(NewProduct {
                name: dto.name,
                available: dto.available.unwrap_or(false),
                price: dto.price.unwrap_or(0.0),
                description: dto.description,
                user: user.id,
                category: category_id,
            })
            .await
            .map_err(DbError::into_app_error)?;

        track_product_created();
        Ok(product.into())
    }

    #[instrument(skip(products))]
    pub async fn get_products(
        products: &dyn ProductRepository,
        pagination: Pagination,
    ) -> Result<PaginatedProductsResponse, AppError> {
        let (total, page) = tokio::try_join!(
            products.count(),
            products.list_populated(pagination.offset(), pagination.limit),
        )
        .map_err(DbError::into_app_error)?;

        Ok(PaginatedProductsResponse {
            meta: PageMeta::new(&pagination, total, BASE_PATH),
            products: page
                .into_iter()
                .map(PopulatedProductResponse::from)
                .collect(),
        })
    }
}
