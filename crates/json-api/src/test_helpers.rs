//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use allot_app::{
    context::AppContext,
    domain::{
        budget::MockBudgetService, items::MockItemsService, plans::MockPlansService,
        transfers::MockTransfersService,
    },
};

use crate::state::State;

pub(crate) const TEST_MAX_UPLOAD_BYTES: u64 = 1024;

fn strict_items_mock() -> MockItemsService {
    let mut items = MockItemsService::new();

    items.expect_list_items().never();
    items.expect_count_items().never();
    items.expect_add_item().never();
    items.expect_update_item().never();
    items.expect_delete_item().never();
    items.expect_clear_items().never();
    items.expect_replace_items().never();

    items
}

fn strict_budget_mock() -> MockBudgetService {
    let mut budget = MockBudgetService::new();

    budget.expect_get_budget().never();
    budget.expect_set_budget().never();

    budget
}

fn strict_plans_mock() -> MockPlansService {
    let mut plans = MockPlansService::new();

    plans.expect_optimise_plan().never();

    plans
}

fn strict_transfers_mock() -> MockTransfersService {
    let mut transfers = MockTransfersService::new();

    transfers.expect_export_items().never();
    transfers.expect_save_export().never();
    transfers.expect_import_items().never();

    transfers
}

fn app_with(
    items: MockItemsService,
    budget: MockBudgetService,
    plans: MockPlansService,
    transfers: MockTransfersService,
) -> AppContext {
    AppContext {
        items: Arc::new(items),
        budget: Arc::new(budget),
        plans: Arc::new(plans),
        transfers: Arc::new(transfers),
    }
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::shared(app, TEST_MAX_UPLOAD_BYTES)))
            .push(route),
    )
}

pub(crate) fn items_service(items: MockItemsService, route: Router) -> Service {
    service_with(
        app_with(
            items,
            strict_budget_mock(),
            strict_plans_mock(),
            strict_transfers_mock(),
        ),
        route,
    )
}

pub(crate) fn budget_service(budget: MockBudgetService, route: Router) -> Service {
    service_with(
        app_with(
            strict_items_mock(),
            budget,
            strict_plans_mock(),
            strict_transfers_mock(),
        ),
        route,
    )
}

pub(crate) fn plans_service(plans: MockPlansService, route: Router) -> Service {
    service_with(
        app_with(
            strict_items_mock(),
            strict_budget_mock(),
            plans,
            strict_transfers_mock(),
        ),
        route,
    )
}

pub(crate) fn transfers_service(transfers: MockTransfersService, route: Router) -> Service {
    service_with(
        app_with(
            strict_items_mock(),
            strict_budget_mock(),
            strict_plans_mock(),
            transfers,
        ),
        route,
    )
}
