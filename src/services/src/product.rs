// Copyright 2026 the softlayer-rust authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use sl::Result;

service! {
    /// The `SoftLayer_Product_Package` service: the catalog of orderable
    /// packages and their prices.
    ProductPackageService, "SoftLayer_Product_Package"
}

impl ProductPackageService {
    /// Retrieves the package targeted by [id][Self::id].
    pub async fn get_object(&self) -> Result<datatypes::ProductPackage> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getObject", None, &self.options)
            .await
    }

    /// Retrieves every orderable package.
    pub async fn get_all_objects(&self) -> Result<Vec<datatypes::ProductPackage>> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getAllObjects", None, &self.options)
            .await
    }

    /// Retrieves the items in the targeted package.
    pub async fn get_items(&self) -> Result<Vec<datatypes::ProductItem>> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getItems", None, &self.options)
            .await
    }

    /// Retrieves the item prices in the targeted package.
    pub async fn get_item_prices(&self) -> Result<Vec<datatypes::ProductItemPrice>> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getItemPrices", None, &self.options)
            .await
    }

    /// Retrieves the regions the targeted package can be ordered in.
    pub async fn get_regions(&self) -> Result<Vec<datatypes::LocationRegion>> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getRegions", None, &self.options)
            .await
    }
}

service! {
    /// The `SoftLayer_Product_Order` service: verifying and placing
    /// orders.
    ProductOrderService, "SoftLayer_Product_Order"
}

impl ProductOrderService {
    /// Checks an order for errors without placing it. The returned
    /// container is the order as the ordering system priced it.
    pub async fn verify_order(
        &self,
        order: &datatypes::ContainerProductOrder,
    ) -> Result<datatypes::ContainerProductOrder> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "verifyOrder",
                Some(&(order,)),
                &self.options,
            )
            .await
    }

    /// Places an order. Set `save_as_quote` to save it as a quote
    /// instead of submitting it.
    pub async fn place_order(
        &self,
        order: &datatypes::ContainerProductOrder,
        save_as_quote: bool,
    ) -> Result<datatypes::ContainerProductOrderReceipt> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "placeOrder",
                Some(&(order, save_as_quote)),
                &self.options,
            )
            .await
    }
}
