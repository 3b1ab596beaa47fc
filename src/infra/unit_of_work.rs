//! Unit of Work - centralized access to every repository.
//!
//! Services depend on the `UnitOfWork` trait rather than on individual
//! stores, so a single handle wires the whole persistence layer and
//! tests can swap any repository for a mock.
//!
//! Each repository call is an independent single-row write; there is no
//! transaction API.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    AccountRepository, AdminStore, CartRepository, CartStore, CategoryRepository, CategoryStore,
    FeedbackRepository, FeedbackStore, OrderRepository, OrderStore, PaymentRepository,
    PaymentStore, ProductRepository, ProductStore, UserStore,
};
use crate::domain::AccountKind;

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Accounts of the given identity space
    fn accounts(&self, kind: AccountKind) -> Arc<dyn AccountRepository>;

    fn categories(&self) -> Arc<dyn CategoryRepository>;

    fn products(&self) -> Arc<dyn ProductRepository>;

    fn cart(&self) -> Arc<dyn CartRepository>;

    fn orders(&self) -> Arc<dyn OrderRepository>;

    fn payments(&self) -> Arc<dyn PaymentRepository>;

    fn feedback(&self) -> Arc<dyn FeedbackRepository>;
}

/// Concrete implementation of UnitOfWork backed by SeaORM stores
pub struct Persistence {
    admins: Arc<AdminStore>,
    users: Arc<UserStore>,
    categories: Arc<CategoryStore>,
    products: Arc<ProductStore>,
    cart: Arc<CartStore>,
    orders: Arc<OrderStore>,
    payments: Arc<PaymentStore>,
    feedback: Arc<FeedbackStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance sharing one connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            admins: Arc::new(AdminStore::new(db.clone())),
            users: Arc::new(UserStore::new(db.clone())),
            categories: Arc::new(CategoryStore::new(db.clone())),
            products: Arc::new(ProductStore::new(db.clone())),
            cart: Arc::new(CartStore::new(db.clone())),
            orders: Arc::new(OrderStore::new(db.clone())),
            payments: Arc::new(PaymentStore::new(db.clone())),
            feedback: Arc::new(FeedbackStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn accounts(&self, kind: AccountKind) -> Arc<dyn AccountRepository> {
        match kind {
            AccountKind::Admin => self.admins.clone(),
            AccountKind::User => self.users.clone(),
        }
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.categories.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    fn cart(&self) -> Arc<dyn CartRepository> {
        self.cart.clone()
    }

    fn orders(&self) -> Arc<dyn OrderRepository> {
        self.orders.clone()
    }

    fn payments(&self) -> Arc<dyn PaymentRepository> {
        self.payments.clone()
    }

    fn feedback(&self) -> Arc<dyn FeedbackRepository> {
        self.feedback.clone()
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use testing::StubUnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
mod testing {
    use super::*;
    use crate::infra::repositories::{
        MockAccountRepository, MockCartRepository, MockCategoryRepository,
        MockFeedbackRepository, MockOrderRepository, MockPaymentRepository,
        MockProductRepository,
    };

    /// Unit of work made of mock repositories.
    ///
    /// Every repository defaults to a mock without expectations, so any
    /// call a test did not set up fails loudly.
    pub struct StubUnitOfWork {
        pub admins: Arc<dyn AccountRepository>,
        pub users: Arc<dyn AccountRepository>,
        pub categories: Arc<dyn CategoryRepository>,
        pub products: Arc<dyn ProductRepository>,
        pub cart: Arc<dyn CartRepository>,
        pub orders: Arc<dyn OrderRepository>,
        pub payments: Arc<dyn PaymentRepository>,
        pub feedback: Arc<dyn FeedbackRepository>,
    }

    impl Default for StubUnitOfWork {
        fn default() -> Self {
            Self {
                admins: Arc::new(MockAccountRepository::new()),
                users: Arc::new(MockAccountRepository::new()),
                categories: Arc::new(MockCategoryRepository::new()),
                products: Arc::new(MockProductRepository::new()),
                cart: Arc::new(MockCartRepository::new()),
                orders: Arc::new(MockOrderRepository::new()),
                payments: Arc::new(MockPaymentRepository::new()),
                feedback: Arc::new(MockFeedbackRepository::new()),
            }
        }
    }

    impl UnitOfWork for StubUnitOfWork {
        fn accounts(&self, kind: AccountKind) -> Arc<dyn AccountRepository> {
            match kind {
                AccountKind::Admin => self.admins.clone(),
                AccountKind::User => self.users.clone(),
            }
        }

        fn categories(&self) -> Arc<dyn CategoryRepository> {
            self.categories.clone()
        }

        fn products(&self) -> Arc<dyn ProductRepository> {
            self.products.clone()
        }

        fn cart(&self) -> Arc<dyn CartRepository> {
            self.cart.clone()
        }

        fn orders(&self) -> Arc<dyn OrderRepository> {
            self.orders.clone()
        }

        fn payments(&self) -> Arc<dyn PaymentRepository> {
            self.payments.clone()
        }

        fn feedback(&self) -> Arc<dyn FeedbackRepository> {
            self.feedback.clone()
        }
    }
}
