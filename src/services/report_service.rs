use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use sea_orm::sea_query::{Expr, ExprTrait};

use crate::{
    dto::products::ProductList,
    dto::reports::{
        DistinctValueList, LowStockList, LowStockRow, MovementList, MovementRow,
        OrderLineTotalList, OrderLineTotalRow, OrderSummaryList, OrderSummaryRow,
        ShipmentSummaryList, ShipmentSummaryRow, SupplierCatalogList, SupplierCatalogRow,
    },
    entity::{
        customers, inventories, order_details, orders, product_movements, products, shipments,
        supplier_products, suppliers, warehouses, Inventories, OrderDetails, Orders,
        ProductMovements, Products, Shipments, SupplierProducts, Suppliers,
    },
    error::AppResult,
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::SortOrder,
    state::AppState,
};

/// Orders joined with their customer, product and supplier, newest first.
pub async fn order_summaries(state: &AppState) -> AppResult<ApiResponse<OrderSummaryList>> {
    let items = order_summary_query()
        .order_by_desc(orders::Column::OrderDate)
        .into_model::<OrderSummaryRow>()
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success(
        "Order summaries",
        OrderSummaryList { items },
        Some(Meta::empty()),
    ))
}

/// Orders with the given status, joined as in `order_summaries`.
pub async fn orders_with_status(
    state: &AppState,
    status: &str,
) -> AppResult<ApiResponse<OrderSummaryList>> {
    let items = order_summary_query()
        .filter(orders::Column::Status.eq(status))
        .order_by_desc(orders::Column::OrderDate)
        .into_model::<OrderSummaryRow>()
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success(
        "Orders by status",
        OrderSummaryList { items },
        Some(Meta::empty()),
    ))
}

/// Orders placed within `[from, to_exclusive)`, oldest first.
pub async fn orders_between(
    state: &AppState,
    from: DateTime<Utc>,
    to_exclusive: DateTime<Utc>,
) -> AppResult<ApiResponse<OrderSummaryList>> {
    let items = order_summary_query()
        .filter(orders::Column::OrderDate.gte(from))
        .filter(orders::Column::OrderDate.lt(to_exclusive))
        .order_by_asc(orders::Column::OrderDate)
        .into_model::<OrderSummaryRow>()
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success(
        "Orders in range",
        OrderSummaryList { items },
        Some(Meta::empty()),
    ))
}

/// Inventory rows below the stock threshold, optionally narrowed to one
/// product category.
pub async fn low_stock(
    state: &AppState,
    threshold: i32,
    category: Option<&str>,
) -> AppResult<ApiResponse<LowStockList>> {
    let mut condition =
        Condition::all().add(inventories::Column::QuantityInStock.lt(threshold));
    if let Some(category) = category.filter(|c| !c.is_empty()) {
        condition = condition.add(products::Column::Category.eq(category));
    }

    let items = Inventories::find()
        .select_only()
        .column_as(products::Column::Id, "product_id")
        .column_as(products::Column::Name, "product_name")
        .column_as(products::Column::Category, "category")
        .column_as(warehouses::Column::Location, "warehouse_location")
        .column_as(inventories::Column::QuantityInStock, "quantity_in_stock")
        .join(JoinType::InnerJoin, inventories::Relation::Products.def())
        .join(JoinType::InnerJoin, inventories::Relation::Warehouses.def())
        .filter(condition)
        .order_by_asc(inventories::Column::QuantityInStock)
        .into_model::<LowStockRow>()
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success(
        "Low stock",
        LowStockList { items },
        Some(Meta::empty()),
    ))
}

/// Shipments heavier than the threshold, heaviest first.
pub async fn heavy_shipments(
    state: &AppState,
    min_weight: f64,
) -> AppResult<ApiResponse<ShipmentSummaryList>> {
    let items = shipment_summary_query()
        .filter(shipments::Column::Weight.gt(min_weight))
        .order_by_desc(shipments::Column::Weight)
        .into_model::<ShipmentSummaryRow>()
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success(
        "Heavy shipments",
        ShipmentSummaryList { items },
        Some(Meta::empty()),
    ))
}

/// Shipments already received at their destination warehouse.
pub async fn received_shipments(state: &AppState) -> AppResult<ApiResponse<ShipmentSummaryList>> {
    let items = shipment_summary_query()
        .filter(shipments::Column::Status.eq("Received"))
        .into_model::<ShipmentSummaryRow>()
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success(
        "Received shipments",
        ShipmentSummaryList { items },
        Some(Meta::empty()),
    ))
}

/// Product movements recorded as shipped out of a warehouse.
pub async fn shipped_movements(state: &AppState) -> AppResult<ApiResponse<MovementList>> {
    let items = ProductMovements::find()
        .select_only()
        .column_as(product_movements::Column::Id, "movement_id")
        .column_as(product_movements::Column::ShipmentId, "shipment_id")
        .column_as(products::Column::Name, "product_name")
        .column_as(warehouses::Column::Location, "warehouse_location")
        .column_as(product_movements::Column::Quantity, "quantity")
        .column_as(product_movements::Column::MovementType, "movement_type")
        .join(
            JoinType::InnerJoin,
            product_movements::Relation::Products.def(),
        )
        .join(
            JoinType::InnerJoin,
            product_movements::Relation::Warehouses.def(),
        )
        .filter(product_movements::Column::MovementType.eq("Shipped"))
        .into_model::<MovementRow>()
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success(
        "Shipped movements",
        MovementList { items },
        Some(Meta::empty()),
    ))
}

/// Order lines whose computed `quantity * unit_price` exceeds the threshold.
pub async fn order_line_totals_above(
    state: &AppState,
    threshold: i64,
) -> AppResult<ApiResponse<OrderLineTotalList>> {
    let line_total = Expr::col((OrderDetails, order_details::Column::Quantity))
        .mul(Expr::col((Products, products::Column::UnitPrice)));

    let items = OrderDetails::find()
        .select_only()
        .column_as(order_details::Column::OrderId, "order_id")
        .column_as(customers::Column::Name, "customer_name")
        .column_as(products::Column::Name, "product_name")
        .column_as(order_details::Column::Quantity, "quantity")
        .column_as(products::Column::UnitPrice, "unit_price")
        .expr_as(line_total.clone(), "line_total")
        .join(JoinType::InnerJoin, order_details::Relation::Orders.def())
        .join(JoinType::InnerJoin, order_details::Relation::Products.def())
        .join(JoinType::InnerJoin, orders::Relation::Customers.def())
        .filter(Expr::expr(line_total).gt(threshold))
        .order_by_desc(order_details::Column::OrderId)
        .into_model::<OrderLineTotalRow>()
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success(
        "Order line totals",
        OrderLineTotalList { items },
        Some(Meta::empty()),
    ))
}

/// Every product, ordered by unit price.
pub async fn products_by_price(
    state: &AppState,
    sort_order: SortOrder,
) -> AppResult<ApiResponse<ProductList>> {
    let finder = Products::find();
    let finder = match sort_order {
        SortOrder::Asc => finder.order_by_asc(products::Column::UnitPrice),
        SortOrder::Desc => finder.order_by_desc(products::Column::UnitPrice),
    };

    let items = finder
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|model| Product {
            id: model.id,
            name: model.name,
            category: model.category,
            unit_price: model.unit_price,
            supplier_id: model.supplier_id,
        })
        .collect();

    Ok(ApiResponse::success(
        "Products by price",
        ProductList { items },
        Some(Meta::empty()),
    ))
}

/// Each product category that appears in at least one inventory row,
/// exactly once.
pub async fn distinct_stocked_categories(
    state: &AppState,
) -> AppResult<ApiResponse<DistinctValueList>> {
    let values = Inventories::find()
        .select_only()
        .column(products::Column::Category)
        .join(JoinType::InnerJoin, inventories::Relation::Products.def())
        .distinct()
        .order_by_asc(products::Column::Category)
        .into_tuple::<String>()
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success(
        "Stocked categories",
        DistinctValueList { values },
        Some(Meta::empty()),
    ))
}

/// Each supplier region, exactly once.
pub async fn distinct_supplier_regions(
    state: &AppState,
) -> AppResult<ApiResponse<DistinctValueList>> {
    let values = Suppliers::find()
        .select_only()
        .column(suppliers::Column::Region)
        .distinct()
        .order_by_asc(suppliers::Column::Region)
        .into_tuple::<String>()
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success(
        "Supplier regions",
        DistinctValueList { values },
        Some(Meta::empty()),
    ))
}

/// The supplier/product catalog pairs, resolved through the join table.
pub async fn supplier_catalog(state: &AppState) -> AppResult<ApiResponse<SupplierCatalogList>> {
    let items = SupplierProducts::find()
        .select_only()
        .column_as(suppliers::Column::Name, "supplier_name")
        .column_as(products::Column::Name, "product_name")
        .column_as(products::Column::Category, "category")
        .join(
            JoinType::InnerJoin,
            supplier_products::Relation::Suppliers.def(),
        )
        .join(
            JoinType::InnerJoin,
            supplier_products::Relation::Products.def(),
        )
        .order_by_asc(suppliers::Column::Name)
        .into_model::<SupplierCatalogRow>()
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success(
        "Supplier catalog",
        SupplierCatalogList { items },
        Some(Meta::empty()),
    ))
}

// Shared join shape of the order reports; callers pick the sort.
fn order_summary_query() -> sea_orm::Select<Orders> {
    Orders::find()
        .select_only()
        .column_as(orders::Column::Id, "order_id")
        .column_as(customers::Column::Name, "customer_name")
        .column_as(customers::Column::LoyaltyStatus, "loyalty_status")
        .column_as(products::Column::Name, "product_name")
        .column_as(suppliers::Column::Name, "supplier_name")
        .column_as(orders::Column::Status, "status")
        .column_as(orders::Column::OrderDate, "order_date")
        .join(JoinType::InnerJoin, orders::Relation::Customers.def())
        .join(JoinType::InnerJoin, orders::Relation::Products.def())
        .join(JoinType::InnerJoin, orders::Relation::Suppliers.def())
}

fn shipment_summary_query() -> sea_orm::Select<Shipments> {
    Shipments::find()
        .select_only()
        .column_as(shipments::Column::Id, "shipment_id")
        .column_as(suppliers::Column::Name, "supplier_name")
        .column_as(warehouses::Column::Location, "warehouse_location")
        .column_as(shipments::Column::DeliveryDate, "delivery_date")
        .column_as(shipments::Column::Status, "status")
        .column_as(shipments::Column::Weight, "weight")
        .join(JoinType::InnerJoin, shipments::Relation::Suppliers.def())
        .join(JoinType::InnerJoin, shipments::Relation::Warehouses.def())
}
