//! Built-in algorithm table
//!
//! Category order here is the iteration order of the built-in catalog.

use super::record::{
    AlgorithmSpec as Algo,
    Difficulty::{Easy, Hard, Medium},
};

/// Static form of a category
pub(crate) struct CategorySpec {
    pub id: &'static str,
    pub algorithms: &'static [Algo],
}

pub(crate) static BUILTIN: &[CategorySpec] = &[
    CategorySpec {
        id: "sorting",
        algorithms: SORTING,
    },
    CategorySpec {
        id: "searching",
        algorithms: SEARCHING,
    },
    CategorySpec {
        id: "pathfinding",
        algorithms: PATHFINDING,
    },
    CategorySpec {
        id: "tree",
        algorithms: TREE,
    },
    CategorySpec {
        id: "dp",
        algorithms: DP,
    },
    CategorySpec {
        id: "string",
        algorithms: STRING,
    },
    CategorySpec {
        id: "greedy",
        algorithms: GREEDY,
    },
    CategorySpec {
        id: "math",
        algorithms: MATH,
    },
    CategorySpec {
        id: "graph",
        algorithms: GRAPH,
    },
    CategorySpec {
        id: "bit",
        algorithms: BIT,
    },
    CategorySpec {
        id: "hash",
        algorithms: HASH,
    },
    CategorySpec {
        id: "geometry",
        algorithms: GEOMETRY,
    },
    CategorySpec {
        id: "backtracking",
        algorithms: BACKTRACKING,
    },
];

const SORTING: &[Algo] = &[
    Algo::new("bubble", "Bubble Sort", "Comparison Sort", Easy)
        .time("O(n²)")
        .cases("O(n)", "O(n²)")
        .space("O(1)")
        .stable(true)
        .desc("Repeatedly steps through list, compares adjacent elements and swaps if needed."),
    Algo::new("selection", "Selection Sort", "Comparison Sort", Easy)
        .time("O(n²)")
        .cases("O(n²)", "O(n²)")
        .space("O(1)")
        .stable(false)
        .desc("Divides array into sorted and unsorted parts, finds minimum and moves to sorted part."),
    Algo::new("insertion", "Insertion Sort", "Comparison Sort", Easy)
        .time("O(n²)")
        .cases("O(n)", "O(n²)")
        .space("O(1)")
        .stable(true)
        .desc("Builds sorted array one element at a time by inserting into correct position."),
    Algo::new("merge", "Merge Sort", "Divide & Conquer", Medium)
        .time("O(n log n)")
        .cases("O(n log n)", "O(n log n)")
        .space("O(n)")
        .stable(true)
        .desc("Divide and conquer: divide array, sort recursively, merge back together."),
    Algo::new("quick", "Quick Sort", "Divide & Conquer", Medium)
        .time("O(n log n)")
        .cases("O(n log n)", "O(n²)")
        .space("O(log n)")
        .stable(false)
        .desc("Selects pivot and partitions around it. Most efficient in practice."),
    Algo::new("heap", "Heap Sort", "Selection Sort", Medium)
        .time("O(n log n)")
        .cases("O(n log n)", "O(n log n)")
        .space("O(1)")
        .stable(false)
        .desc("Builds max heap and repeatedly extracts maximum element."),
    Algo::new("shell", "Shell Sort", "Insertion Sort", Medium)
        .time("O(n log n)")
        .cases("O(n log n)", "O(n²)")
        .space("O(1)")
        .stable(false)
        .desc("Generalization of insertion sort with variable gap sequence."),
    Algo::new("counting", "Counting Sort", "Non-Comparison", Easy)
        .time("O(n+k)")
        .cases("O(n+k)", "O(n+k)")
        .space("O(k)")
        .stable(true)
        .desc("Non-comparison sort. Counts occurrences and reconstructs array."),
    Algo::new("radix", "Radix Sort", "Non-Comparison", Medium)
        .time("O(nk)")
        .cases("O(nk)", "O(nk)")
        .space("O(n+k)")
        .stable(true)
        .desc("Sorts by individual digits from least to most significant."),
    Algo::new("bucket", "Bucket Sort", "Distribution", Medium)
        .time("O(n+k)")
        .cases("O(n+k)", "O(n²)")
        .space("O(n+k)")
        .stable(true)
        .desc("Distributes elements into buckets and sorts each bucket individually."),
];

const SEARCHING: &[Algo] = &[
    Algo::new("linear", "Linear Search", "Sequential", Easy)
        .time("O(n)")
        .cases("O(1)", "O(n)")
        .space("O(1)")
        .desc("Sequentially checks each element until found or end reached."),
    Algo::new("binary", "Binary Search", "Divide & Conquer", Easy)
        .time("O(log n)")
        .cases("O(1)", "O(log n)")
        .space("O(1)")
        .desc("Divides sorted array in half repeatedly until element found."),
    Algo::new("jump", "Jump Search", "Sequential", Medium)
        .time("O(√n)")
        .cases("O(1)", "O(√n)")
        .space("O(1)")
        .desc("Jumps by fixed blocks then does linear search within block."),
    Algo::new("interpolation", "Interpolation Search", "Guessing", Medium)
        .time("O(n)")
        .cases("O(1)", "O(n)")
        .space("O(1)")
        .desc("Uses interpolation formula to estimate element position."),
    Algo::new("exponential", "Exponential Search", "Sequential", Medium)
        .time("O(log n)")
        .cases("O(1)", "O(log n)")
        .space("O(1)")
        .desc("Finds range by doubling, then binary searches within range."),
    Algo::new("ternary", "Ternary Search", "Divide & Conquer", Medium)
        .time("O(log₃ n)")
        .cases("O(1)", "O(log n)")
        .space("O(1)")
        .desc("Divides array into three parts and eliminates one third."),
    Algo::new("fibonacci", "Fibonacci Search", "Sequential", Hard)
        .time("O(log n)")
        .cases("O(1)", "O(log n)")
        .space("O(1)")
        .desc("Uses Fibonacci numbers as jump points for searching."),
];

const PATHFINDING: &[Algo] = &[
    Algo::new("bfs", "Breadth-First Search", "Graph Traversal", Easy)
        .time("O(V+E)")
        .space("O(V)")
        .desc("Explores graph layer by layer. Finds shortest path in unweighted graph."),
    Algo::new("dfs", "Depth-First Search", "Graph Traversal", Easy)
        .time("O(V+E)")
        .space("O(V)")
        .desc("Explores as far as possible along each branch before backtracking."),
    Algo::new("dijkstra", "Dijkstra's Algorithm", "Shortest Path", Medium)
        .time("O((V+E) log V)")
        .space("O(V)")
        .desc("Finds shortest path in weighted graph. Greedy approach with priority queue."),
    Algo::new("bellman_ford", "Bellman-Ford Algorithm", "Shortest Path", Medium)
        .time("O(VE)")
        .space("O(V)")
        .desc("Finds shortest paths, handles negative weights. Detects negative cycles."),
    Algo::new("floyd_warshall", "Floyd-Warshall Algorithm", "All-Pairs Shortest Path", Medium)
        .time("O(V³)")
        .space("O(V²)")
        .desc("All-pairs shortest path. Dynamic programming approach."),
    Algo::new("astar", "A* Algorithm", "Shortest Path", Hard)
        .time("O(E) worst")
        .space("O(V)")
        .desc("Heuristic-based pathfinding. Uses f(n) = g(n) + h(n). Faster than Dijkstra."),
    Algo::new("bidir_search", "Bidirectional Search", "Graph Traversal", Medium)
        .time("O(b^(d/2))")
        .space("O(b^(d/2))")
        .desc("Searches from both start and end simultaneously. Faster than BFS."),
    Algo::new("kruskal", "Kruskal's Algorithm", "Spanning Tree", Medium)
        .time("O(E log E)")
        .space("O(V)")
        .desc("Minimum spanning tree. Greedy with union-find data structure."),
    Algo::new("prim", "Prim's Algorithm", "Spanning Tree", Medium)
        .time("O(E log V)")
        .space("O(V)")
        .desc("Minimum spanning tree. Starts from vertex and grows tree."),
    Algo::new("boruvka", "Borůvka's Algorithm", "Spanning Tree", Hard)
        .time("O(E log V)")
        .space("O(V)")
        .desc("Minimum spanning tree. Merge components approach."),
];

const TREE: &[Algo] = &[
    Algo::new("inorder", "Inorder Traversal", "Tree Traversal", Easy)
        .time("O(n)")
        .space("O(h)")
        .desc("Left-Root-Right. Produces sorted output from BST."),
    Algo::new("preorder", "Preorder Traversal", "Tree Traversal", Easy)
        .time("O(n)")
        .space("O(h)")
        .desc("Root-Left-Right. Useful for copying tree."),
    Algo::new("postorder", "Postorder Traversal", "Tree Traversal", Easy)
        .time("O(n)")
        .space("O(h)")
        .desc("Left-Right-Root. Useful for deleting tree."),
    Algo::new("levelorder", "Level Order Traversal", "Tree Traversal", Easy)
        .time("O(n)")
        .space("O(w)")
        .desc("Breadth-first tree traversal. Uses queue."),
    Algo::new("spiral", "Spiral Traversal", "Tree Traversal", Medium)
        .time("O(n)")
        .space("O(w)")
        .desc("Level order but alternating directions."),
    Algo::new("bst_search", "BST Search", "Binary Search Tree", Easy)
        .time("O(log n) avg, O(n) worst")
        .space("O(h)")
        .desc("Binary search tree lookup operation."),
    Algo::new("bst_insert", "BST Insert", "Binary Search Tree", Easy)
        .time("O(log n) avg, O(n) worst")
        .space("O(h)")
        .desc("Insert node maintaining BST property."),
    Algo::new("bst_delete", "BST Delete", "Binary Search Tree", Medium)
        .time("O(log n) avg, O(n) worst")
        .space("O(h)")
        .desc("Delete node maintaining BST property."),
    Algo::new("avl_rotation", "AVL Rotation", "Self-Balancing Tree", Hard)
        .time("O(1)")
        .space("O(1)")
        .desc("Balance AVL tree through rotations."),
    Algo::new("trie_ops", "Trie Operations", "Trie", Medium)
        .time("O(m)")
        .space("O(ALPHABET_SIZE * N * M)")
        .desc("Insert, search, delete in prefix tree."),
    Algo::new("lca", "Lowest Common Ancestor", "Tree Problem", Medium)
        .time("O(n) to O(log n)")
        .space("O(h)")
        .desc("Find deepest node common to two nodes."),
    Algo::new("diameter", "Tree Diameter", "Tree Problem", Medium)
        .time("O(n)")
        .space("O(h)")
        .desc("Find longest path between any two nodes."),
];

const DP: &[Algo] = &[
    Algo::new("fib", "Fibonacci", "Basic DP", Easy)
        .time("O(n)")
        .space("O(n)")
        .desc("Calculate nth Fibonacci number using memoization."),
    Algo::new("knapsack_01", "0/1 Knapsack", "Optimization", Medium)
        .time("O(nW)")
        .space("O(nW)")
        .desc("Maximize value with weight constraint. Can take/leave items."),
    Algo::new("knapsack_unbounded", "Unbounded Knapsack", "Optimization", Medium)
        .time("O(nW)")
        .space("O(nW)")
        .desc("Maximize value with weight constraint. Can take unlimited items."),
    Algo::new("lcs", "Longest Common Subsequence", "String DP", Medium)
        .time("O(mn)")
        .space("O(mn)")
        .desc("Find longest subsequence common to two sequences."),
    Algo::new("lis", "Longest Increasing Subsequence", "Sequence DP", Medium)
        .time("O(n log n)")
        .space("O(n)")
        .desc("Find longest subsequence in increasing order."),
    Algo::new("edit_distance", "Edit Distance (Levenshtein)", "String DP", Medium)
        .time("O(mn)")
        .space("O(mn)")
        .desc("Minimum edits to transform one string to another."),
    Algo::new("matrix_chain", "Matrix Chain Multiplication", "Optimization", Hard)
        .time("O(n³)")
        .space("O(n²)")
        .desc("Minimize scalar multiplications for chain matrix product."),
    Algo::new("coin_change", "Coin Change", "Optimization", Medium)
        .time("O(nC)")
        .space("O(nC)")
        .desc("Minimum coins to make amount or count ways."),
    Algo::new("lps", "Longest Palindromic Subsequence", "String DP", Medium)
        .time("O(n²)")
        .space("O(n²)")
        .desc("Find longest subsequence that reads same forwards/backwards."),
    Algo::new("word_break", "Word Break", "String DP", Medium)
        .time("O(n²)")
        .space("O(n)")
        .desc("Check if string can be segmented into dictionary words."),
];

const STRING: &[Algo] = &[
    Algo::new("naive_match", "Naive String Matching", "Pattern Matching", Easy)
        .time("O(nm)")
        .space("O(1)")
        .desc("Simple pattern matching. Compare pattern at each position."),
    Algo::new("kmp", "KMP Algorithm", "Pattern Matching", Hard)
        .time("O(n+m)")
        .space("O(m)")
        .desc("Knuth-Morris-Pratt. Efficient pattern matching with failure function."),
    Algo::new("boyer_moore", "Boyer-Moore Algorithm", "Pattern Matching", Hard)
        .time("O(n/m) best")
        .space("O(m+σ)")
        .desc("Pattern matching starting from pattern end. Often fastest in practice."),
    Algo::new("rabin_karp", "Rabin-Karp Algorithm", "Pattern Matching", Medium)
        .time("O(n+m)")
        .space("O(1)")
        .desc("Rolling hash for pattern matching. Good for multiple patterns."),
    Algo::new("aho_corasick", "Aho-Corasick Algorithm", "Pattern Matching", Hard)
        .time("O(n+m+z)")
        .space("O(mk)")
        .desc("Multiple pattern matching. Build trie with failure links."),
    Algo::new("z_algorithm", "Z Algorithm", "Pattern Matching", Hard)
        .time("O(n)")
        .space("O(n)")
        .desc("Finds all occurrences of pattern. Compute Z-array."),
    Algo::new("suffix_array", "Suffix Array", "String Structure", Hard)
        .time("O(n log n)")
        .space("O(n)")
        .desc("Sorted array of all suffixes. Multiple string problems."),
    Algo::new("manacher", "Manacher's Algorithm", "Pattern Matching", Hard)
        .time("O(n)")
        .space("O(n)")
        .desc("Find all palindromic substrings efficiently."),
];

const GREEDY: &[Algo] = &[
    Algo::new("activity_selection", "Activity Selection", "Greedy", Easy)
        .time("O(n log n)")
        .space("O(1)")
        .desc("Select maximum non-overlapping activities."),
    Algo::new("huffman", "Huffman Coding", "Greedy", Medium)
        .time("O(n log n)")
        .space("O(n)")
        .desc("Build optimal prefix-free codes. Minimum average code length."),
    Algo::new("interval_scheduling", "Interval Scheduling", "Greedy", Easy)
        .time("O(n log n)")
        .space("O(1)")
        .desc("Schedule maximum non-overlapping intervals."),
    Algo::new("job_sequencing", "Job Sequencing with Deadlines", "Greedy", Medium)
        .time("O(n²)")
        .space("O(n)")
        .desc("Maximize profit by scheduling jobs before deadlines."),
    Algo::new("fractional_knapsack", "Fractional Knapsack", "Greedy", Easy)
        .time("O(n log n)")
        .space("O(1)")
        .desc("Maximize value with weight constraint. Can take fractions."),
    Algo::new("egyptian_fractions", "Egyptian Fractions", "Greedy", Medium)
        .time("O(n log n)")
        .space("O(n)")
        .desc("Express fraction as sum of unit fractions."),
    Algo::new("gas_station", "Gas Station Problem", "Greedy", Medium)
        .time("O(n)")
        .space("O(1)")
        .desc("Find starting gas station to complete circuit."),
    Algo::new("jump_game", "Jump Game", "Greedy", Easy)
        .time("O(n)")
        .space("O(1)")
        .desc("Determine if can reach last index with jumps."),
];

const MATH: &[Algo] = &[
    Algo::new("gcd_lcm", "GCD & LCM", "Number Theory", Easy)
        .time("O(log(min(a,b)))")
        .space("O(1)")
        .desc("Euclidean algorithm for greatest common divisor and LCM."),
    Algo::new("prime_sieve", "Sieve of Eratosthenes", "Number Theory", Easy)
        .time("O(n log log n)")
        .space("O(n)")
        .desc("Efficient algorithm to find all primes up to n."),
    Algo::new("prime_factorization", "Prime Factorization", "Number Theory", Easy)
        .time("O(√n)")
        .space("O(log n)")
        .desc("Break number into prime factors."),
    Algo::new("modular_exponentiation", "Modular Exponentiation", "Number Theory", Medium)
        .time("O(log n)")
        .space("O(log n)")
        .desc("Compute (a^b) % m efficiently using binary exponentiation."),
    Algo::new("chinese_remainder", "Chinese Remainder Theorem", "Number Theory", Hard)
        .time("O(log n)")
        .space("O(1)")
        .desc("Solve system of congruences."),
    Algo::new("extended_gcd", "Extended Euclidean Algorithm", "Number Theory", Medium)
        .time("O(log(min(a,b)))")
        .space("O(log(min(a,b)))")
        .desc("Find x, y such that ax + by = gcd(a,b)."),
    Algo::new("fast_fourier", "Fast Fourier Transform", "Transform", Hard)
        .time("O(n log n)")
        .space("O(n)")
        .desc("Compute polynomial multiplication efficiently."),
    Algo::new("fibonacci_matrix", "Fibonacci Matrix Method", "Optimization", Hard)
        .time("O(log n)")
        .space("O(1)")
        .desc("Compute large Fibonacci numbers using matrix exponentiation."),
];

const GRAPH: &[Algo] = &[
    Algo::new("topological_sort", "Topological Sorting (Kahn's)", "Graph Algorithm", Medium)
        .time("O(V+E)")
        .space("O(V)")
        .desc("Linear ordering of vertices with in-degree 0 first."),
    Algo::new("scc_kosaraju", "SCC - Kosaraju's", "Graph Algorithm", Hard)
        .time("O(V+E)")
        .space("O(V)")
        .desc("Find strongly connected components using two DFS passes."),
    Algo::new("scc_tarjan", "SCC - Tarjan's", "Graph Algorithm", Hard)
        .time("O(V+E)")
        .space("O(V)")
        .desc("Find SCCs in single DFS using stack."),
    Algo::new("bridge_finding", "Bridge Finding", "Graph Algorithm", Hard)
        .time("O(V+E)")
        .space("O(V)")
        .desc("Find edges whose removal increases connected components."),
    Algo::new("articulation_point", "Articulation Points", "Graph Algorithm", Hard)
        .time("O(V+E)")
        .space("O(V)")
        .desc("Find vertices whose removal increases components."),
    Algo::new("bipartite_check", "Bipartite Check", "Graph Property", Easy)
        .time("O(V+E)")
        .space("O(V)")
        .desc("Check if graph can be 2-colored (bipartite)."),
    Algo::new("cycle_detection", "Cycle Detection", "Graph Property", Medium)
        .time("O(V+E)")
        .space("O(V)")
        .desc("Detect cycles in directed/undirected graphs."),
    Algo::new("maximum_flow", "Maximum Flow (Ford-Fulkerson)", "Flow Network", Hard)
        .time("O(VE²)")
        .space("O(V+E)")
        .desc("Find maximum flow from source to sink."),
];

const BIT: &[Algo] = &[
    Algo::new("bit_counting", "Bit Counting", "Bit Manipulation", Easy)
        .time("O(log n)")
        .space("O(1)")
        .desc("Count set bits (1s) in binary representation."),
    Algo::new("power_of_two", "Power of 2 Check", "Bit Manipulation", Easy)
        .time("O(1)")
        .space("O(1)")
        .desc("Check if number is power of 2 using bit trick."),
    Algo::new("gray_code", "Gray Code", "Bit Manipulation", Medium)
        .time("O(2^n)")
        .space("O(2^n)")
        .desc("Generate gray code sequence (binary codes differing by 1 bit)."),
    Algo::new("xor_pairs", "XOR Pair Finding", "Bit Manipulation", Medium)
        .time("O(n)")
        .space("O(n)")
        .desc("Find pairs with given XOR value."),
    Algo::new("subset_generation", "Subset Generation", "Bit Manipulation", Easy)
        .time("O(2^n)")
        .space("O(2^n)")
        .desc("Generate all subsets using bit representation."),
    Algo::new("single_number", "Single Number (XOR)", "Bit Manipulation", Easy)
        .time("O(n)")
        .space("O(1)")
        .desc("Find single occurring number among duplicates using XOR."),
    Algo::new("hamming_distance", "Hamming Distance", "Bit Manipulation", Easy)
        .time("O(log n)")
        .space("O(1)")
        .desc("Count different bits between two numbers."),
    Algo::new("missing_number", "Missing Number", "Bit Manipulation", Easy)
        .time("O(n)")
        .space("O(1)")
        .desc("Find missing number in 1 to n using XOR or sum."),
];

const HASH: &[Algo] = &[
    Algo::new("hash_function", "Hash Function", "Hashing", Medium)
        .time("O(1) avg")
        .space("O(n)")
        .desc("Basic hash table implementation with hash function."),
    Algo::new("linear_probing", "Linear Probing", "Collision Resolution", Medium)
        .time("O(1) avg")
        .space("O(n)")
        .desc("Handle collisions by finding next empty slot."),
    Algo::new("quadratic_probing", "Quadratic Probing", "Collision Resolution", Medium)
        .time("O(1) avg")
        .space("O(n)")
        .desc("Handle collisions using quadratic offsets."),
    Algo::new("chaining", "Chaining", "Collision Resolution", Easy)
        .time("O(1) avg")
        .space("O(n)")
        .desc("Handle collisions using linked lists."),
    Algo::new("double_hashing", "Double Hashing", "Collision Resolution", Hard)
        .time("O(1) avg")
        .space("O(n)")
        .desc("Handle collisions using two hash functions."),
];

const GEOMETRY: &[Algo] = &[
    Algo::new("convex_hull", "Convex Hull (Graham Scan)", "Geometry", Hard)
        .time("O(n log n)")
        .space("O(n)")
        .desc("Find convex hull of 2D points using Graham scan."),
    Algo::new("line_intersection", "Line Intersection", "Geometry", Medium)
        .time("O(1)")
        .space("O(1)")
        .desc("Check if two line segments intersect."),
    Algo::new("point_in_polygon", "Point in Polygon", "Geometry", Medium)
        .time("O(n)")
        .space("O(1)")
        .desc("Check if point is inside polygon using ray casting."),
    Algo::new("closest_pair", "Closest Pair of Points", "Geometry", Hard)
        .time("O(n log n)")
        .space("O(n)")
        .desc("Find two points with minimum distance."),
];

const BACKTRACKING: &[Algo] = &[
    Algo::new("nqueens", "N-Queens Problem", "Backtracking", Hard)
        .time("O(N!)")
        .space("O(N)")
        .desc("Place N queens on board with no attacks."),
    Algo::new("sudoku", "Sudoku Solver", "Backtracking", Hard)
        .time("O(9^(n*n))")
        .space("O(n²)")
        .desc("Solve sudoku puzzle using backtracking."),
    Algo::new("permutations", "Generate Permutations", "Backtracking", Medium)
        .time("O(N!)")
        .space("O(N)")
        .desc("Generate all permutations of array."),
    Algo::new("combinations", "Generate Combinations", "Backtracking", Medium)
        .time("O(C(n,r))")
        .space("O(r)")
        .desc("Generate all combinations of size r."),
];
