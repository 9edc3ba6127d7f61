use super::model::{CreateProductRequest, Product, UpdateProductRequest};
use super::service::ProductService;
use crate::di::{Container, Injectable};
use crate::exception::HttpException;
use crate::pipe::Pipe;
use crate::pipe::builtins::ParseIntPipe;
use axum::{
    Json, Router,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use std::sync::Arc;

type HttpResult<T> = std::result::Result<T, HttpException>;

/// HTTP surface for products, mounted under [`ProductController::base_path`].
pub struct ProductController {
    service: Arc<ProductService>,
    parse_id: ParseIntPipe,
}

impl Injectable for ProductController {
    fn inject(container: &Container) -> crate::Result<Self> {
        Ok(Self {
            service: container.resolve::<ProductService>()?,
            parse_id: ParseIntPipe,
        })
    }
}

impl ProductController {
    pub fn base_path() -> &'static str {
        "/products"
    }

    pub async fn create(
        &self,
        payload: Result<Json<CreateProductRequest>, JsonRejection>,
    ) -> HttpResult<(StatusCode, Json<Product>)> {
        let Json(req) = payload?;
        let product = self.service.create(req).await?;
        Ok((StatusCode::CREATED, Json(product)))
    }

    pub async fn find_all(&self) -> HttpResult<Json<Vec<Product>>> {
        let products = self.service.find_all().await?;
        Ok(Json(products))
    }

    pub async fn find_one(&self, id: String) -> HttpResult<Json<Product>> {
        let id = self.parse_id.transform(id).await?;
        let product = self.service.find_one(id).await?;
        Ok(Json(product))
    }

    pub async fn update(
        &self,
        id: String,
        payload: Result<Json<UpdateProductRequest>, JsonRejection>,
    ) -> HttpResult<Json<Product>> {
        let id = self.parse_id.transform(id).await?;
        let Json(patch) = payload?;
        let product = self.service.update(id, patch).await?;
        Ok(Json(product))
    }

    pub async fn remove(&self, id: String) -> HttpResult<Json<Product>> {
        let id = self.parse_id.transform(id).await?;
        let product = self.service.remove(id).await?;
        Ok(Json(product))
    }

    pub fn router<S>(controller: Arc<Self>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let member = format!("{}/{{id}}", Self::base_path());

        Router::new()
            .route(
                Self::base_path(),
                get({
                    let controller = controller.clone();
                    move || async move { controller.find_all().await.into_response() }
                })
                .post({
                    let controller = controller.clone();
                    move |payload: Result<Json<CreateProductRequest>, JsonRejection>| async move {
                        controller.create(payload).await.into_response()
                    }
                }),
            )
            .route(
                &member,
                get({
                    let controller = controller.clone();
                    move |Path(id): Path<String>| async move {
                        controller.find_one(id).await.into_response()
                    }
                })
                .put({
                    let controller = controller.clone();
                    move |Path(id): Path<String>,
                          payload: Result<Json<UpdateProductRequest>, JsonRejection>| async move {
                        controller.update(id, payload).await.into_response()
                    }
                })
                .delete({
                    let controller = controller.clone();
                    move |Path(id): Path<String>| async move {
                        controller.remove(id).await.into_response()
                    }
                }),
            )
    }
}
