//! Sample stores and reviews for local development.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::Result;

struct SampleStore {
    name: &'static str,
    address: &'static str,
    area: &'static str,
    category: &'static str,
    phone: &'static str,
    business_hours: &'static str,
    budget_range: &'static str,
    description: &'static str,
}

struct SampleReview {
    /// Index into `STORES`
    store: usize,
    rating: i64,
    nickname: &'static str,
    title: &'static str,
    body: &'static str,
    visit_date: &'static str,
}

const STORE_PASSWORD: &str = "password123";
const REVIEW_PASSWORD: &str = "review123";

const STORES: &[SampleStore] = &[
    SampleStore {
        name: "山田ラーメン",
        address: "東京都渋谷区道玄坂1-2-3",
        area: "東京",
        category: "ラーメン",
        phone: "03-1234-5678",
        business_hours: "11:00〜23:00（定休日：月曜）",
        budget_range: "〜1000円",
        description: "昔ながらの醤油ラーメンが自慢のお店です。スープは鶏ガラベースで、長時間じっくり煮込んだ深い味わいが特徴。チャーシューも柔らかくて絶品です。",
    },
    SampleStore {
        name: "カフェ・ド・パリ",
        address: "東京都港区青山1-2-3",
        area: "東京",
        category: "カフェ",
        phone: "03-2345-6789",
        business_hours: "8:00〜22:00（年中無休）",
        budget_range: "1000〜3000円",
        description: "おしゃれな雰囲気のカフェ。こだわりのコーヒーと手作りスイーツが人気です。Wi-Fi完備で作業もできます。",
    },
    SampleStore {
        name: "焼肉 大阪",
        address: "大阪府大阪市北区梅田1-2-3",
        area: "大阪",
        category: "焼肉",
        phone: "06-1234-5678",
        business_hours: "17:00〜24:00（定休日：火曜）",
        budget_range: "3000〜5000円",
        description: "上質な和牛を使用した焼肉店。特製のタレと新鮮なお肉が自慢です。落ち着いた店内で、大切な方とのお食事にもぴったり。",
    },
    SampleStore {
        name: "寿司処 銀座",
        address: "東京都中央区銀座5-1-1",
        area: "東京",
        category: "寿司",
        phone: "03-3456-7890",
        business_hours: "11:30〜14:00、17:00〜22:00（定休日：日曜）",
        budget_range: "5000円〜",
        description: "新鮮なネタと熟練の技が光る寿司店。カウンター席では職人の技を間近で見られます。接待やデートにおすすめです。",
    },
    SampleStore {
        name: "イタリアン食堂 ボナペティ",
        address: "東京都世田谷区三軒茶屋1-2-3",
        area: "東京",
        category: "イタリアン",
        phone: "03-4567-8901",
        business_hours: "11:00〜15:00、17:00〜23:00（定休日：水曜）",
        budget_range: "1000〜3000円",
        description: "カジュアルに本格イタリアンが楽しめるお店。ピザとパスタが人気で、ランチタイムはお得なセットもあります。",
    },
];

const REVIEWS: &[SampleReview] = &[
    SampleReview {
        store: 0,
        rating: 5,
        nickname: "ラーメン太郎",
        title: "最高の醤油ラーメン！",
        body: "スープが本当に美味しい！深いコクがあって、麺との相性も抜群です。チャーシューも柔らかくて、何度でも通いたくなるお店です。",
        visit_date: "2024-11-20",
    },
    SampleReview {
        store: 0,
        rating: 4,
        nickname: "グルメ花子",
        title: "懐かしい味",
        body: "昔ながらの醤油ラーメンで、ほっとする味わいです。量もちょうど良くて、ランチにぴったり。",
        visit_date: "2024-11-18",
    },
    SampleReview {
        store: 1,
        rating: 5,
        nickname: "カフェ好き",
        title: "作業にぴったり",
        body: "Wi-Fiと電源があって、コーヒーも美味しい。長時間いても居心地が良くて、お気に入りのカフェです。",
        visit_date: "2024-11-22",
    },
    SampleReview {
        store: 1,
        rating: 4,
        nickname: "スイーツ大好き",
        title: "ケーキが絶品",
        body: "手作りのケーキがとても美味しかったです。コーヒーとの相性も良くて、また行きたいと思います。",
        visit_date: "2024-11-19",
    },
    SampleReview {
        store: 2,
        rating: 5,
        nickname: "肉好き",
        title: "お肉が最高！",
        body: "和牛の質が素晴らしい！柔らかくて、口の中でとろけます。特製のタレも絶品で、大満足でした。",
        visit_date: "2024-11-15",
    },
    SampleReview {
        store: 3,
        rating: 5,
        nickname: "寿司通",
        title: "ネタが新鮮",
        body: "どのネタも新鮮で美味しかったです。職人さんの技術も素晴らしく、接客も丁寧でした。特別な日におすすめです。",
        visit_date: "2024-11-10",
    },
    SampleReview {
        store: 4,
        rating: 4,
        nickname: "パスタ好き",
        title: "コスパ最高",
        body: "本格的なパスタがリーズナブルな価格で食べられます。ランチセットがお得で、サラダとドリンクも付いてきます。",
        visit_date: "2024-11-21",
    },
];

/// Counts of inserted sample rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub stores: usize,
    pub reviews: usize,
}

/// Replace all data with the sample set in one transaction
pub async fn run(pool: &SqlitePool) -> Result<SeedSummary> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM reviews").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM stores").execute(&mut *tx).await?;

    let mut store_ids = Vec::with_capacity(STORES.len());
    for sample in STORES {
        let now = Utc::now();
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO stores (
                name, address, area, category, phone, business_hours,
                budget_range, description, edit_password, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(sample.name)
        .bind(sample.address)
        .bind(sample.area)
        .bind(sample.category)
        .bind(sample.phone)
        .bind(sample.business_hours)
        .bind(sample.budget_range)
        .bind(sample.description)
        .bind(STORE_PASSWORD)
        .bind(now)
        .bind(now)
        .fetch_all(&mut *tx)
        .await?
        .pop()
        .ok_or(sqlx::Error::RowNotFound)?;
        store_ids.push(id);
    }

    for sample in REVIEWS {
        sqlx::query(
            r#"
            INSERT INTO reviews (
                store_id, rating, nickname, title, body, visit_date, edit_password, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(store_ids[sample.store])
        .bind(sample.rating)
        .bind(sample.nickname)
        .bind(sample.title)
        .bind(sample.body)
        .bind(sample.visit_date)
        .bind(REVIEW_PASSWORD)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        stores: STORES.len(),
        reviews: REVIEWS.len(),
    };
    tracing::info!(
        "Seeded {} stores and {} reviews",
        summary.stores,
        summary.reviews
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_reviews_reference_known_stores() {
        assert!(REVIEWS.iter().all(|r| r.store < STORES.len()));
        assert!(REVIEWS.iter().all(|r| (1..=5).contains(&r.rating)));
    }
}
