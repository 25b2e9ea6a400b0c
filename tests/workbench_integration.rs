//! Integration tests for the subscription store, plan catalog and workbench.
//!
//! These tests drive the public handlers over the in-memory adapters:
//! 1. Lifecycle, plan change and payment commands against one subscription
//! 2. Plan catalog maintenance
//! 3. Snapshot assembly, including degraded sources and the collection cache

use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;

use subscription_workbench::adapters::{
    CachedSubscriptionRepository, InMemoryBusinessProfiles, InMemoryOrderReporting,
    InMemoryPlanRepository, InMemorySubscriptionRepository,
};
use subscription_workbench::application::{
    ChangeSubscriptionPlanCommand, ChangeSubscriptionPlanHandler, ChangeSubscriptionStatusCommand,
    ChangeSubscriptionStatusHandler, CreatePlanCommand, CreatePlanHandler,
    CreateSubscriptionCommand, CreateSubscriptionHandler, DeletePlanCommand, DeletePlanHandler,
    GetPlanHandler, GetPlanQuery, GetSubscriptionHandler, GetSubscriptionQuery,
    GetWorkbenchSnapshotQuery, ListPlansHandler, ListPlansQuery, RecordPaymentCommand,
    RecordPaymentHandler, SubscriptionSummarizer, WorkbenchAggregator, WorkbenchSettings,
};
use subscription_workbench::domain::foundation::{
    BusinessId, Currency, Timestamp, TransactionId,
};
use subscription_workbench::domain::objectives::{BusinessObjectives, ObjectiveTargets};
use subscription_workbench::domain::plan::{PlanDraft, PlanError, PlanFeatures, ResourceLimits};
use subscription_workbench::domain::revenue::DailyRevenue;
use subscription_workbench::domain::subscription::{
    PaymentMethod, PaymentOutcome, PaymentRecord, PaymentStatus, Subscription, SubscriptionError,
    SubscriptionStatus,
};
use subscription_workbench::domain::workbench::{PillarName, RecentKind};
use subscription_workbench::ports::{PlanRepository, SubscriptionRepository};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn draft(name: &str, price: rust_decimal::Decimal, months: u32) -> PlanDraft {
    PlanDraft {
        name: name.to_string(),
        description: format!("Plan {}", name),
        price,
        currency: Currency::Cop,
        duration_months: months,
        limits: ResourceLimits::new(3, 500, 300, 1),
        features: PlanFeatures::default(),
        active: true,
        popular: false,
    }
}

struct Store {
    subscriptions: Arc<InMemorySubscriptionRepository>,
    plans: Arc<InMemoryPlanRepository>,
}

impl Store {
    fn new() -> Self {
        Self {
            subscriptions: Arc::new(InMemorySubscriptionRepository::new()),
            plans: Arc::new(InMemoryPlanRepository::new()),
        }
    }

    fn subscriptions(&self) -> Arc<dyn SubscriptionRepository> {
        self.subscriptions.clone()
    }

    fn plans(&self) -> Arc<dyn PlanRepository> {
        self.plans.clone()
    }

    async fn create_plan(&self, name: &str, price: rust_decimal::Decimal, months: u32) -> String {
        let plan = CreatePlanHandler::new(self.plans())
            .handle(CreatePlanCommand {
                draft: draft(name, price, months),
            })
            .await
            .unwrap();
        plan.id.to_string()
    }

    async fn subscribe(&self, business: &str, plan_id: &str, status: &str) -> Subscription {
        CreateSubscriptionHandler::new(self.subscriptions(), self.plans())
            .handle(CreateSubscriptionCommand {
                business_id: business.to_string(),
                business_name: format!("Negocio {}", business),
                plan_id: plan_id.to_string(),
                status: status.to_string(),
                start_date: Timestamp::now(),
                currency: None,
                payment_method: PaymentMethod::of_kind("tarjeta"),
                auto_renew: true,
                created_by: "admin".to_string(),
                notes: None,
            })
            .await
            .unwrap()
            .subscription
    }
}

fn payment(tx: &str, status: PaymentStatus) -> PaymentRecord {
    PaymentRecord {
        transaction_id: TransactionId::new(tx).unwrap(),
        payment_date: Timestamp::now(),
        amount: dec!(49900),
        payment_method: "PSE".to_string(),
        status,
        receipt_url: None,
    }
}

// =============================================================================
// Subscription store
// =============================================================================

#[tokio::test]
async fn suspending_an_active_subscription_clears_active_flag() {
    let store = Store::new();
    let plan_id = store.create_plan("Básico", dec!(49900), 12).await;
    let created = store.subscribe("n1", &plan_id, "activa").await;
    assert!(created.is_active());

    let result = ChangeSubscriptionStatusHandler::new(store.subscriptions())
        .handle(ChangeSubscriptionStatusCommand {
            subscription_id: created.id.to_string(),
            status: "suspendida".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result.previous_status, SubscriptionStatus::Active);
    assert_eq!(result.subscription.status(), SubscriptionStatus::Suspended);
    assert!(!result.subscription.is_active());

    let stored = GetSubscriptionHandler::new(store.subscriptions())
        .handle(GetSubscriptionQuery::ById(created.id.to_string()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status(), SubscriptionStatus::Suspended);
    assert!(!stored.is_active());
}

#[tokio::test]
async fn unknown_target_status_is_rejected() {
    let store = Store::new();
    let plan_id = store.create_plan("Básico", dec!(49900), 12).await;
    let created = store.subscribe("n1", &plan_id, "activa").await;

    let err = ChangeSubscriptionStatusHandler::new(store.subscriptions())
        .handle(ChangeSubscriptionStatusCommand {
            subscription_id: created.id.to_string(),
            status: "congelada".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SubscriptionError::InvalidState(_)));
}

#[tokio::test]
async fn negative_plan_price_leaves_record_unchanged() {
    let store = Store::new();
    let plan_id = store.create_plan("Básico", dec!(49900), 12).await;
    let created = store.subscribe("n1", &plan_id, "activa").await;

    let err = ChangeSubscriptionPlanHandler::new(store.subscriptions())
        .handle(ChangeSubscriptionPlanCommand {
            subscription_id: created.id.to_string(),
            plan_id: "p2".to_string(),
            plan_name: "Pro".to_string(),
            monthly_value: dec!(-5),
            total_value: dec!(0),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SubscriptionError::ValidationFailed { .. }));

    let stored = store
        .subscriptions
        .find_by_id(&created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn creation_freezes_plan_price_and_duration() {
    let store = Store::new();
    let plan_id = store.create_plan("Pyme", dec!(89900), 12).await;
    let created = store.subscribe("n1", &plan_id, "pendiente_pago").await;

    assert_eq!(created.monthly_value(), dec!(89900));
    assert_eq!(created.total_value(), dec!(1078800));
    assert_eq!(created.currency, Currency::Cop);
    assert!(!created.is_active());
    assert_eq!(created.expiration_date, created.start_date.add_months(12));
}

#[tokio::test]
async fn second_subscription_for_business_is_refused() {
    let store = Store::new();
    let plan_id = store.create_plan("Básico", dec!(49900), 1).await;
    store.subscribe("n1", &plan_id, "activa").await;

    let err = CreateSubscriptionHandler::new(store.subscriptions(), store.plans())
        .handle(CreateSubscriptionCommand {
            business_id: "n1".to_string(),
            business_name: "Negocio n1".to_string(),
            plan_id,
            status: "activa".to_string(),
            start_date: Timestamp::now(),
            currency: None,
            payment_method: PaymentMethod::of_kind("efectivo"),
            auto_renew: false,
            created_by: "admin".to_string(),
            notes: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SubscriptionError::AlreadyExists(_)));
}

#[tokio::test]
async fn pending_payment_settles_once() {
    let store = Store::new();
    let plan_id = store.create_plan("Básico", dec!(49900), 12).await;
    let created = store.subscribe("n1", &plan_id, "activa").await;
    let handler = RecordPaymentHandler::new(store.subscriptions());

    let first = handler
        .handle(RecordPaymentCommand {
            subscription_id: created.id.to_string(),
            payment: payment("tx-1", PaymentStatus::Pending),
        })
        .await
        .unwrap();
    assert_eq!(first.outcome, PaymentOutcome::Appended);

    let settled = handler
        .handle(RecordPaymentCommand {
            subscription_id: created.id.to_string(),
            payment: payment("tx-1", PaymentStatus::Succeeded),
        })
        .await
        .unwrap();
    assert_eq!(settled.outcome, PaymentOutcome::Updated);
    assert_eq!(settled.subscription.payment_history().len(), 1);
    assert_eq!(settled.subscription.total_paid(), dec!(49900));

    let again = handler
        .handle(RecordPaymentCommand {
            subscription_id: created.id.to_string(),
            payment: payment("tx-1", PaymentStatus::Failed),
        })
        .await;
    assert!(matches!(again, Err(SubscriptionError::ValidationFailed { .. })));
}

// =============================================================================
// Plan catalog
// =============================================================================

#[tokio::test]
async fn catalog_lifecycle() {
    let store = Store::new();
    let basic = store.create_plan("Básico", dec!(49900), 1).await;
    store.create_plan("Pyme", dec!(89900), 12).await;

    let all = ListPlansHandler::new(store.plans())
        .handle(ListPlansQuery { only_active: true })
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    DeletePlanHandler::new(store.plans())
        .handle(DeletePlanCommand {
            plan_id: basic.clone(),
        })
        .await
        .unwrap();

    let err = GetPlanHandler::new(store.plans())
        .handle(GetPlanQuery { plan_id: basic })
        .await
        .unwrap_err();
    assert!(matches!(err, PlanError::NotFound(_)));
}

#[tokio::test]
async fn invalid_plan_draft_is_rejected() {
    let store = Store::new();
    let err = CreatePlanHandler::new(store.plans())
        .handle(CreatePlanCommand {
            draft: draft("Eterno", dec!(10000), 36),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PlanError::ValidationFailed { .. }));
}

// =============================================================================
// Workbench
// =============================================================================

struct Sources {
    profiles: Arc<InMemoryBusinessProfiles>,
    reporting: Arc<InMemoryOrderReporting>,
    subscriptions: Arc<InMemorySubscriptionRepository>,
}

impl Sources {
    fn new() -> Self {
        Self {
            profiles: Arc::new(InMemoryBusinessProfiles::new()),
            reporting: Arc::new(InMemoryOrderReporting::new()),
            subscriptions: Arc::new(InMemorySubscriptionRepository::new()),
        }
    }

    fn aggregator(&self) -> WorkbenchAggregator {
        WorkbenchAggregator::new(
            self.profiles.clone(),
            self.reporting.clone(),
            self.subscriptions.clone(),
            WorkbenchSettings::default(),
        )
    }
}

#[tokio::test]
async fn unset_objectives_fall_back_to_platform_defaults() {
    let sources = Sources::new();

    let snapshot = sources
        .aggregator()
        .handle(GetWorkbenchSnapshotQuery {
            business_id: Some("n1".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(snapshot.objectives, ObjectiveTargets::system_default());
    assert_eq!(snapshot.objectives.daily, dec!(500000));
    assert_eq!(snapshot.objectives.weekly, dec!(2000000));
    assert_eq!(snapshot.objectives.monthly, dec!(5000000));
    assert!(snapshot.is_complete());
}

#[tokio::test]
async fn weekly_kpi_clamps_over_achievement() {
    let sources = Sources::new();
    let today = Timestamp::now().date();
    let revenues = [100, 100, 100, 100, 100, 100, 500];
    for (offset, revenue) in revenues.iter().enumerate() {
        let date = today - chrono::Duration::days(6 - offset as i64);
        sources
            .reporting
            .record_day(DailyRevenue {
                date,
                revenue: rust_decimal::Decimal::from(*revenue),
                order_count: 1,
                average_order_value: rust_decimal::Decimal::from(*revenue),
            })
            .await;
    }
    sources
        .profiles
        .set_objectives(
            BusinessId::new("n1").unwrap(),
            BusinessObjectives {
                weekly: Some(dec!(1000)),
                ..BusinessObjectives::default()
            },
        )
        .await;

    let snapshot = sources
        .aggregator()
        .handle(GetWorkbenchSnapshotQuery {
            business_id: Some("n1".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(snapshot.kpis.last_7_days.amount, dec!(1200));
    assert_eq!(snapshot.kpis.last_7_days.objective, dec!(1000));
    assert_eq!(snapshot.kpis.last_7_days.percentage.value(), dec!(100));
    // Unset targets still come from the defaults.
    assert_eq!(snapshot.objectives.daily, dec!(500000));
}

#[tokio::test]
async fn long_expired_subscriptions_count_but_are_not_expiring() {
    let repository = Arc::new(InMemorySubscriptionRepository::new());
    let store = Store {
        subscriptions: repository.clone(),
        plans: Arc::new(InMemoryPlanRepository::new()),
    };
    let plan_id = store.create_plan("Básico", dec!(49900), 1).await;
    let now = Timestamp::now();

    for i in 0..12 {
        let created = store.subscribe(&format!("n{}", i), &plan_id, "activa").await;
        let mut expired = created;
        expired.start_date = now.minus_days(40);
        expired.expiration_date = now.minus_days(10);
        expired.set_status(SubscriptionStatus::Expired, now);
        repository.update(&expired).await.unwrap();
    }

    let summarizer = SubscriptionSummarizer::new(repository.clone());
    let summary = summarizer.summary().await.into_value();
    assert_eq!(summary.expired, 12);
    assert_eq!(summary.total, 12);

    let expiring = summarizer
        .recent_window(RecentKind::Expiring, 7, now)
        .await
        .into_value();
    assert!(expiring.is_empty());
}

#[tokio::test]
async fn snapshot_survives_every_source_failing() {
    let sources = Sources::new();
    sources.profiles.set_unavailable(true);
    sources.reporting.set_unavailable(true);
    sources.subscriptions.set_unavailable(true);

    let snapshot = sources
        .aggregator()
        .handle(GetWorkbenchSnapshotQuery {
            business_id: Some("n1".to_string()),
        })
        .await
        .unwrap();

    assert!(!snapshot.is_complete());
    assert_eq!(snapshot.degraded_pillars.len(), 7);
    assert!(snapshot.degraded_pillars.contains(&PillarName::Objectives));
    assert_eq!(snapshot.summary.total, 0);
    assert!(snapshot.recent.is_empty());
    assert_eq!(snapshot.kpis.last_30_days.amount, dec!(0));
    assert_eq!(snapshot.objectives, ObjectiveTargets::system_default());
}

#[tokio::test]
async fn cached_collection_is_read_once_per_snapshot() {
    let sources = Sources::new();
    let cached = Arc::new(CachedSubscriptionRepository::new(
        sources.subscriptions.clone(),
        Duration::from_secs(30),
    ));
    let aggregator = WorkbenchAggregator::new(
        sources.profiles.clone(),
        sources.reporting.clone(),
        cached,
        WorkbenchSettings::default(),
    );

    let snapshot = aggregator.build_snapshot(None).await;

    assert!(snapshot.is_complete());
    assert_eq!(sources.subscriptions.collection_reads(), 1);
}
