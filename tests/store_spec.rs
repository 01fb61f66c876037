use article_search::error::StoreError;
use article_search::models::*;
use article_search::store::persist::JsonFile;
use article_search::store::ArticleStore;
use chrono::Utc;
use speculate2::speculate;

fn insert(store: &ArticleStore, title: &str, content: &str, tags: &[&str]) -> Article {
    store
        .insert(CreateArticleInput::new(title, content).with_tags(tags.iter().copied()))
        .expect("Failed to insert article")
}

speculate! {
    before {
        let store = ArticleStore::open_memory();
    }

    describe "insert" {
        it "assigns id 1 to the first article" {
            let article = insert(&store, "Cats and Dogs", "Cats are great pets.", &["pets"]);

            assert_eq!(article.id, 1);
            assert_eq!(article.tags, vec!["pets".to_string()]);
        }

        it "assigns strictly increasing ids" {
            let ids: Vec<u64> = (0..5)
                .map(|i| insert(&store, &format!("Title {i}"), "Body", &[]).id)
                .collect();

            assert!(ids.windows(2).all(|w| w[1] > w[0]));
        }

        it "defaults tags to empty" {
            let article = store
                .insert(CreateArticleInput::new("Title", "Body"))
                .expect("Failed to insert");

            assert!(article.tags.is_empty());
        }

        it "rejects an empty title without changing the store" {
            let result = store.insert(CreateArticleInput::new("", "Body"));

            assert!(matches!(result, Err(StoreError::Validation(ref m)) if m == "Title and content are required"));
            assert!(store.is_empty());
        }

        it "rejects missing content without changing the store" {
            insert(&store, "Existing", "Body", &[]);

            let result = store.insert(CreateArticleInput {
                title: Some("Title".to_string()),
                ..CreateArticleInput::default()
            });

            assert!(matches!(result, Err(StoreError::Validation(_))));
            assert_eq!(store.len(), 1);
        }

        it "keeps insertion order" {
            insert(&store, "A", "a", &[]);
            insert(&store, "B", "b", &[]);

            let titles: Vec<String> = store.all().into_iter().map(|a| a.title).collect();
            assert_eq!(titles, vec!["A", "B"]);
        }

        it "shares state between clones" {
            let other = store.clone();
            insert(&other, "Shared", "Body", &[]);

            assert_eq!(store.len(), 1);
        }
    }

    describe "get" {
        it "returns NotFound for an id never issued" {
            assert!(matches!(store.get(999), Err(StoreError::NotFound)));
        }

        it "returns the exact inserted article" {
            let created = insert(&store, "Hello", "World", &["greeting"]);

            assert_eq!(store.get(created.id).expect("Lookup failed"), created);
        }
    }

    describe "search" {
        it "requires a keyword or a tag" {
            let result = store.search(&SearchQuery::default());

            assert!(matches!(result, Err(StoreError::Validation(ref m)) if m == "Keyword or tag is required for search"));
        }

        it "treats empty terms as missing" {
            let query = SearchQuery {
                keyword: Some(String::new()),
                tag: Some(String::new()),
                sort_by: None,
            };

            assert!(matches!(store.search(&query), Err(StoreError::Validation(_))));
        }

        it "returns only articles matching the keyword or the tag" {
            insert(&store, "Cats", "Meow", &[]);
            insert(&store, "Stocks", "Markets", &["finance"]);
            insert(&store, "Hamsters", "Squeak", &["pets"]);

            let query = SearchQuery {
                keyword: Some("Cats".to_string()),
                tag: Some("pets".to_string()),
                sort_by: None,
            };
            let results = store.search(&query).expect("Search failed");

            let titles: Vec<&str> = results.iter().map(|a| a.title.as_str()).collect();
            assert_eq!(titles, vec!["Cats", "Hamsters"]);
        }

        it "returns only the tagged article for a tag search" {
            insert(&store, "First", "No tags here", &[]);
            let second = insert(&store, "Second", "Tagged", &["pets"]);

            let results = store.search(&SearchQuery::tag("pets")).expect("Search failed");

            assert_eq!(results, vec![second]);
        }

        it "orders relevance results by non-increasing score" {
            insert(&store, "rust", "", &[]);
            insert(&store, "Rust notes", "rust rust RUST", &[]);
            insert(&store, "Rust", "about rust", &[]);

            let results = store.search(&SearchQuery::keyword("ust")).expect("Search failed");

            let scores: Vec<usize> = results
                .iter()
                .map(|a| a.title.to_lowercase().matches("ust").count() + a.content.to_lowercase().matches("ust").count())
                .collect();
            assert_eq!(scores, vec![4, 2, 1]);
        }

        it "keeps store order for non-relevance sorting" {
            insert(&store, "Rust", "", &[]);
            insert(&store, "Rust Rust", "Rust", &[]);

            let query = SearchQuery {
                keyword: Some("Rust".to_string()),
                tag: None,
                sort_by: Some("date".to_string()),
            };
            let ids: Vec<u64> = store.search(&query).expect("Search failed").iter().map(|a| a.id).collect();

            assert_eq!(ids, vec![1, 2]);
        }

        it "returns an empty list when nothing matches" {
            insert(&store, "Cats", "Meow", &[]);

            let results = store.search(&SearchQuery::keyword("Zebra")).expect("Search failed");

            assert!(results.is_empty());
        }
    }

    describe "persistence" {
        it "reloads the same articles from disk" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("articles.json");

            let disk = ArticleStore::open(&path).expect("Failed to open");
            insert(&disk, "One", "First", &["a"]);
            insert(&disk, "Two", "Second", &[]);

            let reloaded = ArticleStore::open(&path).expect("Failed to reopen");
            assert_eq!(reloaded.all(), disk.all());
        }

        it "continues ids after the highest stored id" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("articles.json");
            let stored: Vec<Article> = [1, 5]
                .into_iter()
                .map(|id| Article {
                    id,
                    title: format!("Article {id}"),
                    content: "Body".to_string(),
                    tags: Vec::new(),
                    created_at: Utc::now(),
                })
                .collect();
            JsonFile::new(&path).save(&stored).expect("Failed to seed file");

            let disk = ArticleStore::open(&path).expect("Failed to open");
            let next = insert(&disk, "Next", "Body", &[]);

            assert_eq!(next.id, 6);
        }

        it "gives concurrent inserts distinct ids and keeps every write" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("articles.json");
            let disk = ArticleStore::open(&path).expect("Failed to open");
            let writers = 32;

            let mut ids: Vec<u64> = std::thread::scope(|scope| {
                let handles: Vec<_> = (0..writers)
                    .map(|i| {
                        let store = disk.clone();
                        scope.spawn(move || insert(&store, &format!("Article {i}"), "Body", &[]).id)
                    })
                    .collect();
                handles
                    .into_iter()
                    .map(|h| h.join().expect("Writer thread panicked"))
                    .collect()
            });
            ids.sort_unstable();
            ids.dedup();

            assert_eq!(ids.len(), writers);
            let reloaded = ArticleStore::open(&path).expect("Failed to reopen");
            assert_eq!(reloaded.len(), writers);
        }

        it "fails to open a corrupt data file" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("articles.json");
            std::fs::write(&path, "not json").expect("Failed to write");

            assert!(ArticleStore::open(&path).is_err());
        }
    }
}
