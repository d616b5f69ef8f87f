/// Maximum store name length, counted in UTF-16 code units
pub const MAX_STORE_NAME_LEN: usize = 100;

/// Maximum review body length, counted in UTF-16 code units
pub const MAX_REVIEW_BODY_LEN: usize = 1000;

/// Lowest accepted rating
pub const MIN_RATING: f64 = 1.0;

/// Highest accepted rating
pub const MAX_RATING: f64 = 5.0;

/// Page used when the listing request does not name one
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the listing request does not name one
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

// =============================================================================
// Error Messages
// =============================================================================

pub const ERR_STORE_NAME_REQUIRED: &str = "店舗名は必須です";

pub const ERR_STORE_NAME_TOO_LONG: &str = "店舗名は100文字以内で入力してください";

pub const ERR_REVIEW_BODY_REQUIRED: &str = "レビュー本文は必須です";

pub const ERR_REVIEW_BODY_TOO_LONG: &str = "レビュー本文は1000文字以内で入力してください";

pub const ERR_RATING_OUT_OF_RANGE: &str = "評価は1〜5の範囲で入力してください";

pub const ERR_RATING_NOT_INTEGER: &str = "評価は整数で入力してください";

pub const ERR_INVALID_STORE_ID: &str = "無効な店舗IDです";

pub const ERR_INVALID_REVIEW_ID: &str = "無効なレビューIDです";

pub const ERR_INVALID_PAGE: &str = "ページ番号は1以上の整数で指定してください";

pub const ERR_INVALID_LIMIT: &str = "表示件数は1以上の整数で指定してください";

pub const ERR_STORE_NOT_FOUND: &str = "店舗が見つかりません";

pub const ERR_REVIEW_NOT_FOUND: &str = "レビューが見つかりません";

pub const ERR_PASSWORD_REQUIRED: &str = "パスワードが必要です";

pub const ERR_PASSWORD_MISMATCH: &str = "パスワードが正しくありません";

pub const ERR_INVALID_REQUEST_BODY: &str = "リクエストの形式が正しくありません";

pub const ERR_INTERNAL: &str = "サーバー内部でエラーが発生しました";

// =============================================================================
// Confirmation Messages
// =============================================================================

pub const MSG_STORE_DELETED: &str = "店舗を削除しました";

pub const MSG_REVIEW_DELETED: &str = "レビューを削除しました";
