//! # 批量导入导出处理器

use crate::error::AdminError;
use crate::management::response::{app_error, success_with_message};
use crate::management::server::AppState;
use crate::management::services;
use crate::sheet::EXPORT_FILE_NAME;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// 导入账户（multipart 文件上传）
pub async fn import_accounts(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    // 取第一个带文件名的字段作为上传文件
    let mut upload: Option<(String, Vec<u8>)> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let Some(filename) = field.file_name().map(ToString::to_string) else {
                    continue;
                };
                match field.bytes().await {
                    Ok(bytes) => {
                        upload = Some((filename, bytes.to_vec()));
                        break;
                    }
                    Err(err) => {
                        return app_error(AdminError::import(format!("读取上传文件失败: {err}")));
                    }
                }
            }
            Ok(None) => break,
            Err(err) => {
                return app_error(AdminError::import(format!("解析上传请求失败: {err}")));
            }
        }
    }

    let Some((filename, bytes)) = upload else {
        return app_error(AdminError::validation("没有选择文件"));
    };

    match services::transfer::import_accounts(&state.database, &state.policy, &filename, &bytes)
        .await
    {
        Ok(count) => success_with_message(
            json!({ "imported": count }),
            &format!("成功导入 {count} 条记录"),
        ),
        Err(err) => {
            tracing::error!("导入失败 (文件: {filename}): {err}");
            app_error(err)
        }
    }
}

/// 导出账户为 xlsx 下载
pub async fn export_accounts(State(state): State<AppState>) -> Response {
    match services::transfer::export_accounts(&state.database).await {
        Ok(bytes) => (
            [
                (
                    header::CONTENT_TYPE,
                    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
                        .to_string(),
                ),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("导出失败: {err}");
            app_error(err)
        }
    }
}
