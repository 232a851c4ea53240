use serde::{Deserialize, Serialize};

/// Статусы заказа ресторана
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Canceled,
    Processing,
    Delivering,
    Delivered,
}

impl OrderStatus {
    /// Код статуса в API и в строке запроса
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Processing => "processing",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Подпись для пользователя панели
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Canceled => "Cancelado",
            OrderStatus::Processing => "Em preparo",
            OrderStatus::Delivering => "Em entrega",
            OrderStatus::Delivered => "Entregue",
        }
    }

    /// Все статусы в порядке жизненного цикла заказа
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Canceled,
            OrderStatus::Processing,
            OrderStatus::Delivering,
            OrderStatus::Delivered,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "canceled" => Some(OrderStatus::Canceled),
            "processing" => Some(OrderStatus::Processing),
            "delivering" => Some(OrderStatus::Delivering),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }
}

/// Фильтр по статусу: либо все заказы, либо один статус.
///
/// `All` является значением по умолчанию и никогда не пишется в URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub const ALL_CODE: &'static str = "all";

    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => Self::ALL_CODE,
            StatusFilter::Only(status) => status.code(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StatusFilter::All => "Todos Status",
            StatusFilter::Only(status) => status.display_name(),
        }
    }

    /// Варианты выпадающего списка: "все" и затем каждый статус
    pub fn all() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(OrderStatus::all().into_iter().map(StatusFilter::Only))
            .collect()
    }

    /// Тотальное отображение строки в фильтр: неизвестный код даёт `All`
    pub fn from_code_or_all(code: &str) -> Self {
        match OrderStatus::from_code(code.trim()) {
            Some(status) => StatusFilter::Only(status),
            None => StatusFilter::All,
        }
    }

    pub fn as_status(&self) -> Option<OrderStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(*status),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StatusFilter::All)
    }
}
