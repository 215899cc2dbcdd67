use criterion::{criterion_group, criterion_main, Criterion};

use common::pagination::ListQuery;
use service::crud::CrudService;
use service::notification::{CreateNotification, NotificationStore};

fn bench_memory_store(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = NotificationStore::new();
    let org = uuid::Uuid::new_v4();

    // pre-fill outside of the measured section
    rt.block_on(async {
        for i in 0..1_000 {
            let _ = store
                .create(CreateNotification {
                    organization_id: org,
                    user_id: None,
                    reminder_id: None,
                    title: format!("n{i}"),
                    body: String::new(),
                })
                .await;
        }
    });

    c.bench_function("memory_store_create", |b| {
        b.iter(|| {
            rt.block_on(store.create(CreateNotification {
                organization_id: org,
                user_id: None,
                reminder_id: None,
                title: "bench".into(),
                body: String::new(),
            }))
            .unwrap();
        });
    });

    c.bench_function("memory_store_list_page", |b| {
        b.iter(|| {
            let q = ListQuery { organization_id: Some(org), page: Some(3), per_page: Some(20) };
            rt.block_on(store.find_all(q)).unwrap();
        });
    });
}

criterion_group!(benches, bench_memory_store);
criterion_main!(benches);
