//! Repository tests against a throwaway database (needs DATABASE_URL)

use rand::Rng;
use sqlx::PgPool;

use library_server::{
    error::{AppError, AppResult},
    models::{NewAuthor, NewBook, NewReader, NewReview},
    repository::{AuthorStore, BookStore, ReaderStore, Repository, ReviewStore},
};

fn random_phone() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "+7(9{:02})-{:03}-{:02}-{:02}",
        rng.gen_range(0..100),
        rng.gen_range(0..1000),
        rng.gen_range(0..100),
        rng.gen_range(0..100)
    )
}

fn not_found<T: std::fmt::Debug>(result: AppResult<T>) -> String {
    match result {
        Err(AppError::NotFound(msg)) => msg,
        other => panic!("expected not found, got {:?}", other),
    }
}

fn new_reader(phone: String) -> NewReader {
    NewReader {
        first_name: "Kris".into(),
        last_name: "Kelvin".into(),
        phone,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_author_lifecycle(pool: PgPool) {
    let repo = Repository::new(pool);

    let created = repo
        .authors
        .create(NewAuthor {
            first_name: "Ivan".into(),
            last_name: "Bunin".into(),
        })
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(repo.authors.find_by_id(created.id).await.unwrap(), created);

    repo.authors.delete(created.id).await.unwrap();
    assert!(matches!(
        repo.authors.find_by_id(created.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        repo.authors.delete(created.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_duplicate_book_rejected(pool: PgPool) {
    let repo = Repository::new(pool);

    let author = repo
        .authors
        .create(NewAuthor {
            first_name: "Ivan".into(),
            last_name: "Bunin".into(),
        })
        .await
        .unwrap();

    let new_book = NewBook {
        title: "Dark Avenues".into(),
        publish_year: 1943,
        author_ids: [author.id].into_iter().collect(),
    };
    let book = repo.books.create(new_book.clone()).await.unwrap();
    repo.books.add_author(book.id, author.id).await.unwrap();

    let same_title_other_case = NewBook {
        title: "dark avenues".into(),
        ..new_book
    };
    assert!(matches!(
        repo.books.create(same_title_other_case).await,
        Err(AppError::AlreadyExists(_))
    ));

    let authors = repo.books.find_authors(book.id).await.unwrap();
    assert_eq!(authors, vec![author]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_reader_phone_uniqueness(pool: PgPool) {
    let repo = Repository::new(pool);

    let phone = random_phone();
    let first = repo.readers.create(new_reader(phone.clone())).await.unwrap();
    let second = repo.readers.create(new_reader(random_phone())).await.unwrap();

    assert!(matches!(
        repo.readers.create(new_reader(phone.clone())).await,
        Err(AppError::AlreadyExists(_))
    ));
    assert!(matches!(
        repo.readers.update_phone(second.id, phone.clone()).await,
        Err(AppError::AlreadyExists(_))
    ));

    // The reader's own number counts as taken too
    match repo.readers.update_phone(first.id, phone.clone()).await {
        Err(AppError::AlreadyExists(msg)) => assert_eq!(msg, "This number is already taken"),
        other => panic!("unexpected {:?}", other),
    }

    let fresh = random_phone();
    let updated = repo.readers.update_phone(first.id, fresh.clone()).await.unwrap();
    assert_eq!(updated.phone, fresh);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_one_review_per_reader_and_book(pool: PgPool) {
    let repo = Repository::new(pool);

    let reader = repo.readers.create(new_reader(random_phone())).await.unwrap();
    let book = repo
        .books
        .create(NewBook {
            title: "The Village".into(),
            publish_year: 1910,
            author_ids: Default::default(),
        })
        .await
        .unwrap();

    let review = NewReview {
        reader_id: reader.id,
        book_id: book.id,
        content: "Bleak".into(),
    };
    let created = repo.reviews.create(review.clone()).await.unwrap();
    assert_eq!(created.date, chrono::Utc::now().date_naive());

    assert!(matches!(
        repo.reviews.create(review).await,
        Err(AppError::AlreadyExists(_))
    ));
    assert_eq!(repo.reviews.find_by_book(book.id).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_empty_tables_are_not_found(pool: PgPool) {
    let repo = Repository::new(pool);

    assert_eq!(not_found(repo.authors.find_all().await), "Authors not found");
    assert_eq!(not_found(repo.books.find_all().await), "Books not found");
    assert_eq!(not_found(repo.readers.find_all().await), "Readers not found");
    assert_eq!(not_found(repo.reviews.find_by_book(1).await), "Reviews not found");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_book_lifecycle(pool: PgPool) {
    let repo = Repository::new(pool);

    let created = repo
        .books
        .create(NewBook {
            title: "Life and Fate".into(),
            publish_year: 1980,
            author_ids: Default::default(),
        })
        .await
        .unwrap();
    let found = repo.books.find_by_id(created.id).await.unwrap();
    assert_eq!(found, created);
    assert_eq!(found.title, "Life and Fate");
    assert_eq!(found.publish_year, 1980);

    repo.books.delete(created.id).await.unwrap();
    assert_eq!(not_found(repo.books.find_by_id(created.id).await), "Book not found");
    assert_eq!(not_found(repo.books.delete(created.id).await), "Book not found");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_reader_lifecycle(pool: PgPool) {
    let repo = Repository::new(pool);

    let phone = random_phone();
    let created = repo.readers.create(new_reader(phone.clone())).await.unwrap();
    let found = repo.readers.find_by_id(created.id).await.unwrap();
    assert_eq!(found, created);
    assert_eq!(found.phone, phone);

    repo.readers.delete(created.id).await.unwrap();
    assert_eq!(not_found(repo.readers.find_by_id(created.id).await), "Reader not found");
    assert_eq!(not_found(repo.readers.delete(created.id).await), "Reader not found");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_update_phone_of_missing_reader(pool: PgPool) {
    let repo = Repository::new(pool);

    assert_eq!(
        not_found(repo.readers.update_phone(i64::MAX, random_phone()).await),
        "Reader not found"
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_reader_cannot_take_same_book_twice(pool: PgPool) {
    let repo = Repository::new(pool);

    let reader = repo.readers.create(new_reader(random_phone())).await.unwrap();
    let book = repo
        .books
        .create(NewBook {
            title: "Oblomov".into(),
            publish_year: 1859,
            author_ids: Default::default(),
        })
        .await
        .unwrap();

    repo.readers.add_book(reader.id, book.id).await.unwrap();
    match repo.readers.add_book(reader.id, book.id).await {
        Err(AppError::AlreadyExists(msg)) => assert_eq!(msg, "Reader already has this book"),
        other => panic!("unexpected {:?}", other),
    }

    let books = repo.readers.find_books(reader.id).await.unwrap();
    assert_eq!(books, vec![book]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_same_title_with_other_authors_is_allowed(pool: PgPool) {
    let repo = Repository::new(pool);

    let first = repo
        .authors
        .create(NewAuthor {
            first_name: "Ilya".into(),
            last_name: "Ilf".into(),
        })
        .await
        .unwrap();
    let second = repo
        .authors
        .create(NewAuthor {
            first_name: "Yevgeny".into(),
            last_name: "Petrov".into(),
        })
        .await
        .unwrap();

    let book = repo
        .books
        .create(NewBook {
            title: "Twelve Chairs".into(),
            publish_year: 1928,
            author_ids: [first.id].into_iter().collect(),
        })
        .await
        .unwrap();
    repo.books.add_author(book.id, first.id).await.unwrap();

    let other = repo
        .books
        .create(NewBook {
            title: "Twelve Chairs".into(),
            publish_year: 1928,
            author_ids: [second.id].into_iter().collect(),
        })
        .await
        .unwrap();
    assert_ne!(other.id, book.id);
}
