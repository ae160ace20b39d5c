/// ページング付きリスト操作の駆動
///
/// Kalturaのリスト系アクションは1始まりのページ番号で呼び出し、
/// 空ページが返るまで繰り返して全件を集める。リモートが空ページを
/// 返さなくなった場合に備え、設定されたページ数上限で打ち切る。
use crate::api::error::ApiError;
use crate::api::types::Pager;

/// 空ページが返るまで全ページを取得して連結する
///
/// 取得順（ページ順）を保持します。`max_pages` を超えても空ページが
/// 現れない場合は ApiError::PageLimitExceeded を返します。
///
/// # Arguments
/// * `page_size` - 1ページあたりの件数
/// * `max_pages` - 取得する最大ページ数
/// * `fetch_page` - ページカーソルを受け取り1ページ分を返す呼び出し
pub async fn collect_all_pages<T, F, Fut>(
    page_size: i32,
    max_pages: u32,
    mut fetch_page: F,
) -> Result<Vec<T>, ApiError>
where
    F: FnMut(Pager) -> Fut,
    Fut: Future<Output = Result<Vec<T>, ApiError>>,
{
    let mut all = Vec::new();
    let mut page_index: i32 = 1;

    loop {
        if page_index > max_pages as i32 {
            return Err(ApiError::PageLimitExceeded { max_pages });
        }

        let page = fetch_page(Pager {
            page_size,
            page_index,
        })
        .await?;

        if page.is_empty() {
            break;
        }

        all.extend(page);
        page_index += 1;
    }

    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_accumulates_pages_in_order_until_empty() {
        // 500, 500, 237, 0 件のページ → 1237件、順序保持
        let pages = vec![
            (0..500).collect::<Vec<i32>>(),
            (500..1000).collect::<Vec<i32>>(),
            (1000..1237).collect::<Vec<i32>>(),
            Vec::new(),
        ];

        let result = collect_all_pages(500, 100, |pager| {
            let page = pages[(pager.page_index - 1) as usize].clone();
            async move { Ok(page) }
        })
        .await
        .expect("paging should succeed");

        assert_eq!(result.len(), 1237);
        assert_eq!(result, (0..1237).collect::<Vec<i32>>());
    }

    #[tokio::test]
    async fn test_empty_first_page_yields_empty_result() {
        let result: Vec<i32> = collect_all_pages(500, 100, |_pager| async { Ok(Vec::new()) })
            .await
            .expect("paging should succeed");
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_pager_starts_at_index_one_and_advances() {
        let calls = AtomicUsize::new(0);
        let _ = collect_all_pages(100, 100, |pager| {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(pager.page_index as usize, call + 1);
            assert_eq!(pager.page_size, 100);
            async move { Ok(if call < 2 { vec![call] } else { Vec::new() }) }
        })
        .await
        .expect("paging should succeed");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_page_limit_guard_stops_runaway_remote() {
        // 常に同じ非空ページを返す壊れたリモート
        let result: Result<Vec<i32>, ApiError> =
            collect_all_pages(500, 5, |_pager| async { Ok(vec![1, 2, 3]) }).await;

        match result {
            Err(ApiError::PageLimitExceeded { max_pages }) => assert_eq!(max_pages, 5),
            other => panic!("Expected PageLimitExceeded, got {:?}", other.map(|v| v.len())),
        }
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let result: Result<Vec<i32>, ApiError> = collect_all_pages(500, 100, |_pager| async {
            Err(ApiError::network("connection reset"))
        })
        .await;
        assert!(matches!(result, Err(ApiError::Network { .. })));
    }
}
