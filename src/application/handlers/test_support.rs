//! Hand-written port mocks shared by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::foundation::{
    BusinessId, Currency, DomainError, ErrorCode, PlanId, SubscriptionId, Timestamp,
};
use crate::domain::objectives::BusinessObjectives;
use crate::domain::plan::{Plan, PlanDraft, PlanFeatures, ResourceLimits};
use crate::domain::revenue::DailyRevenue;
use crate::domain::subscription::{
    NewSubscription, PaymentMethod, PlanSnapshot, Subscription, SubscriptionStatus,
};
use crate::ports::{BusinessProfileReader, OrderReporting, PlanRepository, SubscriptionRepository};

// ════════════════════════════════════════════════════════════════════════════
// Subscription Repository
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockSubscriptionRepository {
    subscriptions: Mutex<Vec<Subscription>>,
    fail_reads: bool,
    fail_writes: bool,
    writes: Mutex<u32>,
}

impl MockSubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(subscriptions: Vec<Subscription>) -> Self {
        Self {
            subscriptions: Mutex::new(subscriptions),
            ..Self::default()
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes(subscriptions: Vec<Subscription>) -> Self {
        Self {
            subscriptions: Mutex::new(subscriptions),
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Vec<Subscription> {
        self.subscriptions.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> u32 {
        *self.writes.lock().unwrap()
    }

    fn check_read(&self) -> Result<(), DomainError> {
        if self.fail_reads {
            return Err(DomainError::upstream("Simulated read failure"));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), DomainError> {
        *self.writes.lock().unwrap() += 1;
        if self.fail_writes {
            return Err(DomainError::upstream("Simulated write failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl SubscriptionRepository for MockSubscriptionRepository {
    async fn list_all(&self) -> Result<Vec<Subscription>, DomainError> {
        self.check_read()?;
        Ok(self.stored())
    }

    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        self.check_read()?;
        Ok(self.stored().into_iter().find(|s| &s.id == id))
    }

    async fn find_by_business_id(
        &self,
        business_id: &BusinessId,
    ) -> Result<Option<Subscription>, DomainError> {
        self.check_read()?;
        Ok(self
            .stored()
            .into_iter()
            .find(|s| &s.business_id == business_id))
    }

    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        self.check_write()?;
        self.subscriptions.lock().unwrap().push(subscription.clone());
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        self.check_write()?;
        let mut subscriptions = self.subscriptions.lock().unwrap();
        match subscriptions.iter_mut().find(|s| s.id == subscription.id) {
            Some(existing) => {
                *existing = subscription.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::SubscriptionNotFound, "missing")
                .with_detail("id", subscription.id.as_str())),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Plan Repository
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockPlanRepository {
    plans: Mutex<Vec<Plan>>,
    fail: bool,
}

impl MockPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(plans: Vec<Plan>) -> Self {
        Self {
            plans: Mutex::new(plans),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            plans: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn stored(&self) -> Vec<Plan> {
        self.plans.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::upstream("Simulated catalog failure"));
        }
        Ok(())
    }

    fn not_found(id: &PlanId) -> DomainError {
        DomainError::new(ErrorCode::PlanNotFound, "missing").with_detail("id", id.as_str())
    }
}

#[async_trait]
impl PlanRepository for MockPlanRepository {
    async fn list_all(&self) -> Result<Vec<Plan>, DomainError> {
        self.check()?;
        Ok(self.stored())
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        self.check()?;
        Ok(self.stored().into_iter().find(|p| &p.id == id))
    }

    async fn save(&self, plan: &Plan) -> Result<(), DomainError> {
        self.check()?;
        self.plans.lock().unwrap().push(plan.clone());
        Ok(())
    }

    async fn update(&self, plan: &Plan) -> Result<(), DomainError> {
        self.check()?;
        let mut plans = self.plans.lock().unwrap();
        match plans.iter_mut().find(|p| p.id == plan.id) {
            Some(existing) => {
                *existing = plan.clone();
                Ok(())
            }
            None => Err(Self::not_found(&plan.id)),
        }
    }

    async fn delete(&self, id: &PlanId) -> Result<(), DomainError> {
        self.check()?;
        let mut plans = self.plans.lock().unwrap();
        let before = plans.len();
        plans.retain(|p| &p.id != id);
        if plans.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Reporting Collaborators
// ════════════════════════════════════════════════════════════════════════════

pub struct MockBusinessProfileReader {
    objectives: Option<BusinessObjectives>,
    fail: bool,
}

impl MockBusinessProfileReader {
    pub fn with(objectives: Option<BusinessObjectives>) -> Self {
        Self {
            objectives,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            objectives: None,
            fail: true,
        }
    }
}

#[async_trait]
impl BusinessProfileReader for MockBusinessProfileReader {
    async fn get_objectives(
        &self,
        _business_id: &BusinessId,
    ) -> Result<Option<BusinessObjectives>, DomainError> {
        if self.fail {
            return Err(DomainError::upstream("Simulated profile failure"));
        }
        Ok(self.objectives)
    }
}

pub struct MockOrderReporting {
    days: Vec<DailyRevenue>,
    window_total: Decimal,
    fail_series: bool,
    fail_total: bool,
    windows: Mutex<Vec<(NaiveDate, NaiveDate)>>,
}

impl MockOrderReporting {
    pub fn with(days: Vec<DailyRevenue>, window_total: Decimal) -> Self {
        Self {
            days,
            window_total,
            fail_series: false,
            fail_total: false,
            windows: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_series: true,
            fail_total: true,
            ..Self::with(Vec::new(), Decimal::ZERO)
        }
    }

    pub fn failing_total(days: Vec<DailyRevenue>) -> Self {
        Self {
            fail_total: true,
            ..Self::with(days, Decimal::ZERO)
        }
    }

    pub fn requested_windows(&self) -> Vec<(NaiveDate, NaiveDate)> {
        self.windows.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderReporting for MockOrderReporting {
    async fn last_7_days(&self) -> Result<Vec<DailyRevenue>, DomainError> {
        if self.fail_series {
            return Err(DomainError::upstream("Simulated reporting failure"));
        }
        Ok(self.days.clone())
    }

    async fn total_in_window(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal, DomainError> {
        self.windows.lock().unwrap().push((start, end));
        if self.fail_total {
            return Err(DomainError::upstream("Simulated reporting failure"));
        }
        Ok(self.window_total)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Fixtures
// ════════════════════════════════════════════════════════════════════════════

pub fn subscription(id: &str, business: &str, status: SubscriptionStatus) -> Subscription {
    let start = Timestamp::now();
    let mut sub = Subscription::create(NewSubscription {
        id: SubscriptionId::new(id).unwrap(),
        business_id: BusinessId::new(business).unwrap(),
        business_name: format!("Negocio {business}"),
        plan: PlanSnapshot::new("basic", "Básico", dec!(49900), dec!(598800)).unwrap(),
        status: SubscriptionStatus::Active,
        start_date: start,
        expiration_date: start.add_months(12),
        currency: Currency::Cop,
        payment_method: PaymentMethod::of_kind("tarjeta"),
        auto_renew: true,
        created_by: "admin".to_string(),
        notes: None,
    })
    .unwrap();
    sub.set_status(status, start);
    sub
}

pub fn plan_draft(name: &str) -> PlanDraft {
    PlanDraft {
        name: name.to_string(),
        description: format!("Plan {name}"),
        price: dec!(89900),
        currency: Currency::Cop,
        duration_months: 12,
        limits: ResourceLimits::new(5, 1000, 500, 2),
        features: PlanFeatures::default(),
        active: true,
        popular: false,
    }
}

pub fn plan(id: &str, active: bool) -> Plan {
    let mut draft = plan_draft(&format!("Plan {id}"));
    draft.active = active;
    draft.into_plan(PlanId::new(id).unwrap()).unwrap()
}

pub fn revenue_day(date: NaiveDate, revenue: Decimal) -> DailyRevenue {
    DailyRevenue {
        date,
        revenue,
        order_count: 1,
        average_order_value: revenue,
    }
}
